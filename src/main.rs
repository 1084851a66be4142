use clap::Parser;
use colorize::AnsiColor;
use constant::{DEFAULT_IMAGE_NAME, DEFAULT_PAYLOAD_NAME, HEADER_SIZE, LOADER_MAX_PAYLOAD, NAME};
use data::PackError;
use std::process::exit;

mod constant;
mod data;
mod packer;

static mut VERBOSE_FLAG: bool = false;

fn handle_fatal_pack_err(err: PackError) -> ! {
    println!("{err}");
    exit(1)
}

fn _verbose_println(msg: &str) {
    unsafe {
        if VERBOSE_FLAG {
            println!("{NAME}: {} {}", "verbose:".to_string().yellow(), msg)
        }
    }
}

#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => (crate::_verbose_println(&format!($($arg)*)));
}

#[derive(Parser)]
#[command(name = NAME, about = "wraps a raw binary payload in a CSA image header")]
struct Cli {
    /// raw payload file to wrap
    #[arg(default_value = DEFAULT_PAYLOAD_NAME)]
    input: String,
    /// output image file
    #[arg(short, long, default_value = DEFAULT_IMAGE_NAME)]
    output: String,
    /// enable verbose printing
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    unsafe { VERBOSE_FLAG = cli.verbose }
    verbose_println!("input file: {}", cli.input);
    verbose_println!("output file: {}", cli.output);

    let payload = match packer::read_payload(&cli.input) {
        Ok(payload) => payload,
        Err(err) => handle_fatal_pack_err(err),
    };
    verbose_println!("read {} byte payload", payload.len());

    if packer::exceeds_loader_limit(payload.len()) {
        println!(
            "{NAME}: {} payload is {} bytes, the CSA loader accepts at most {LOADER_MAX_PAYLOAD}",
            "warning:".to_string().yellow(),
            payload.len()
        );
    }

    let image = match packer::package(&payload) {
        Ok(image) => image,
        Err(err) => handle_fatal_pack_err(err),
    };
    match packer::write_image(&image, &cli.output) {
        Ok(()) => (),
        Err(err) => handle_fatal_pack_err(err),
    }
    println!(
        "wrote {} ({} byte payload + {HEADER_SIZE} byte header = {} total)",
        cli.output,
        payload.len(),
        image.len()
    );
}
