//! Print where a mod file splits into song and sample data
//!
//! Doesn't write anything; use the `splitmod` binary for that.

fn main() {
    let filename = std::env::args_os().nth(1).expect("filename");
    let data = std::fs::read(&filename).expect("open file");
    let ptm = splitmod::ProTrackerModule::new(&data).expect("supported mod file");
    let layout = ptm.layout();
    println!(
        "{}: {:?} signature {}",
        filename.to_string_lossy(),
        String::from_utf8_lossy(ptm.song_name()),
        ptm.signature()
    );
    println!(
        "{} of 128 positions played, {} patterns stored",
        ptm.song_length(),
        layout.pattern_count
    );
    println!("song:    {:?} ({} bytes)", layout.song.range(), layout.song.length);
    println!("samples: {:?} ({} bytes)", layout.samples.range(), layout.samples.length);
}
