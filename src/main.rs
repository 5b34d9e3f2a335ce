use csn_a2::{Error, MonochromeImage, PrintMode, Printer, PrinterProfile};
use std::env;

//
// cargo run -- [IMAGE] [TEXT]
//
// The serial device is taken from PRINTER_PORT (default /dev/ttyS0), set the
// baud rate beforehand, e.g. `stty -F /dev/ttyS0 9600 raw`.
//

const DEFAULT_PORT: &str = "/dev/ttyS0";

fn print_usage() {
    println!("Usage: csn-a2 [IMAGE] [TEXT]");
    println!("Prints TEXT (default \"Hello World!\"), then IMAGE if given, then cuts.");
    println!("\nEnvironment:");
    println!("  PRINTER_PORT        serial device (default {})", DEFAULT_PORT);
    println!("  PRINTER_DOT_WIDTH   print head width in dots (default 384)");
    println!("  PRINTER_MAX_HEIGHT  tallest raster image in rows (default 2000)");
}

fn profile_from_env() -> PrinterProfile {
    let mut profile = PrinterProfile::new();
    if let Some(width) = env_number("PRINTER_DOT_WIDTH") {
        profile = profile.dot_width(width);
    }
    if let Some(height) = env_number("PRINTER_MAX_HEIGHT") {
        profile = profile.max_height(height);
    }
    profile
}

fn env_number(key: &str) -> Option<u32> {
    let value = env::var(key).ok()?;
    match value.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            eprintln!("Ignoring {}={}: not a number", key, value);
            None
        }
    }
}

fn run(port: &str, image: Option<&str>, text: &str) -> Result<(), Error> {
    let mut printer = Printer::open(port, profile_from_env())?;

    printer.reset()?;
    printer.set_print_mode(PrintMode::default())?;
    printer.print_text(text)?;
    printer.feed(1)?;

    if let Some(path) = image {
        let bitmap = MonochromeImage::open(path, csn_a2::DEFAULT_THRESHOLD)?;
        log::info!("printing {} ({}x{})", path, bitmap.width(), bitmap.height());
        printer.print_bitmap(&bitmap)?;
    }

    printer.feed(3)?;
    printer.cut_paper()?;
    printer.close()
}

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "[{}:{}] {} - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.level(),
                record.args()
            )
        })
        .init();

    let args: Vec<String> = env::args().collect();

    if args.iter().skip(1).any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let image = args.get(1).map(String::as_str);
    let text = args.get(2).map(String::as_str).unwrap_or("Hello World!\n");
    let port = env::var("PRINTER_PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());

    println!("Printing on {}", port);

    match run(&port, image, text) {
        Ok(()) => println!("Print completed successfully!"),
        Err(err) => {
            eprintln!("Print failed: {}", err);
            std::process::exit(1);
        }
    }
}
