use pickup_schedule::{Schedule, render_html_document, render_text_table};
use std::env;
use std::fs;
use std::process;

const DEFAULT_HTML_PATH: &str = "pickup_schedule.html";

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let schedule = Schedule::current_term();

    match args.first().map(String::as_str) {
        None => {
            print!("{}", render_text_table(&schedule));
        }
        Some("-h") | Some("--html") => {
            let path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_HTML_PATH);
            let document = render_html_document(&schedule);
            if let Err(err) = fs::write(path, document) {
                eprintln!("Error writing file {path}: {err}");
                process::exit(1);
            }
            println!("HTML table has been written to {path}");
        }
        Some(other) => {
            eprintln!("Unrecognized argument '{other}'. Usage: cli [-h|--html [FILE]]");
            process::exit(2);
        }
    }
}
