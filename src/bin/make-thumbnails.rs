use std::error::Error;

use make_thumbnails::{settings::ThumbnailSettings, thumbnailer};

fn main() {
    env_logger::init();
    // per-file failures are reported by `run` and never change the exit code
    if let Err(e) = real_main() {
        eprintln!("{}", e);
    }
}

fn real_main() -> Result<(), Box<dyn Error>> {
    let inputs = std::env::args_os().skip(1); // skip argv[0], path to our binary
    let mut stdout = std::io::stdout().lock();
    thumbnailer::run(inputs, &ThumbnailSettings::default(), &mut stdout)?;
    Ok(())
}
