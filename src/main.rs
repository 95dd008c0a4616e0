mod booking;
mod catalog;
mod dates;
mod display;
mod errors;
mod store;
mod web;

use std::path::Path;

use booking::export_bookings_to_csv;
use catalog::load_facility;
use display::{print_bookings, print_facility_summary, write_bookings_to_file};
use store::BookingStore;

const FACILITY_PATH: &str = "data/facility.json";
const DEFAULT_STORE_PATH: &str = "data/bookings.json";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let store_path =
        std::env::var("BOOKINGS_PATH").unwrap_or_else(|_| DEFAULT_STORE_PATH.to_string());
    let facility = load_facility(FACILITY_PATH);

    let args: Vec<String> = std::env::args().collect();

    // Web mode: JSON API for the booking flow
    if args.len() > 1 && args[1] == "web" {
        let port = args
            .get(2)
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);

        println!("Starting booking server on port {}...", port);
        println!("Facility: {}", facility.name);
        println!("Bookings file: {}", store_path);
        println!("Access the API at http://localhost:{}/api/facility", port);

        let store = BookingStore::open(&store_path);
        web::start_server(port, facility, store).await?;
        return Ok(());
    }

    // Export mode: dump stored bookings to CSV
    if args.len() > 1 && args[1] == "export" {
        let out_path = args.get(2).map(String::as_str).unwrap_or("bookings.csv");
        let store = BookingStore::open(&store_path);
        export_bookings_to_csv(store.list(), Path::new(out_path))?;
        println!("Exported {} bookings to {}", store.len(), out_path);
        return Ok(());
    }

    // CLI mode: show the facility and everything booked so far
    let store = BookingStore::open(&store_path);
    print_facility_summary(&facility);
    print_bookings(store.list());

    if !store.is_empty() {
        write_bookings_to_file(store.list(), "bookings_summary.txt")?;
        println!("\nSummary saved to bookings_summary.txt");
    }

    Ok(())
}
