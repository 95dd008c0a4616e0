use actix_web::{middleware, web, App, HttpResponse, HttpServer, Result};
use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::booking::{
    build_booking, generate_slots, period_config, slot_count, SelectionState, Slot, TimePeriod,
};
use crate::catalog::FacilityInfo;
use crate::dates::{format_date_display, format_day_name, format_month_year, upcoming_dates};
use crate::store::BookingStore;

/// How many days ahead the booking window reaches
const BOOKING_WINDOW_DAYS: usize = 10;

pub struct AppState {
    pub facility: FacilityInfo,
    pub store: Mutex<BookingStore>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    date: String,
    period: TimePeriod,
    start_slot_index: usize,
    duration: u32,
    court: String,
    player_count: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    period: TimePeriod,
    label: &'static str,
    start_hour: u32,
    end_hour: u32,
    display_time: &'static str,
    slot_count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateOption {
    date: String,
    day_name: String,
    day_number: u32,
    display: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatesResponse {
    month_year: String,
    dates: Vec<DateOption>,
}

// Facility descriptor endpoint
async fn get_facility(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(&state.facility))
}

// Period catalog endpoint
async fn get_periods() -> Result<HttpResponse> {
    let periods: Vec<PeriodSummary> = TimePeriod::ALL
        .iter()
        .map(|&period| {
            let config = period_config(period);
            PeriodSummary {
                period,
                label: config.label,
                start_hour: config.start_hour,
                end_hour: config.end_hour,
                display_time: config.display_time,
                slot_count: slot_count(period),
            }
        })
        .collect();

    Ok(HttpResponse::Ok().json(periods))
}

// Slot list endpoint; an unknown period name yields an empty list
async fn get_slots(period: web::Path<String>) -> Result<HttpResponse> {
    let slots = match TimePeriod::from_name(&period) {
        Some(period) => generate_slots(period),
        None => Vec::<Slot>::new(),
    };
    Ok(HttpResponse::Ok().json(slots))
}

// Booking window endpoint
async fn get_dates() -> Result<HttpResponse> {
    let today = Utc::now().date_naive();
    let dates = upcoming_dates(today, BOOKING_WINDOW_DAYS);

    let options: Vec<DateOption> = dates
        .iter()
        .map(|&date| DateOption {
            date: date.format("%Y-%m-%d").to_string(),
            day_name: format_day_name(date),
            day_number: date.day(),
            display: format_date_display(date),
        })
        .collect();

    Ok(HttpResponse::Ok().json(DatesResponse {
        month_year: format_month_year(dates[0]),
        dates: options,
    }))
}

// Booking creation endpoint: replays the request through the selection
// state machine, validates, and stores the result
async fn create_booking(
    req: web::Json<BookingRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let date = match NaiveDate::parse_from_str(&req.date, "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": "invalid date, expected YYYY-MM-DD"
            })))
        }
    };

    if req.duration == 0 {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": "duration must be at least 1 hour"
        })));
    }

    let mut selection = SelectionState::new(req.period);
    selection.set_date(date);
    selection.tap_slot(req.start_slot_index);
    let end_index = req.start_slot_index + req.duration as usize - 1;
    if end_index > req.start_slot_index {
        selection.tap_slot(end_index);
    }

    // A tap outside the period's grid is ignored by the state machine, so
    // a mismatch here means the requested range does not exist
    if selection.start_slot_index() != Some(req.start_slot_index)
        || selection.duration() != req.duration
    {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": "requested slots fall outside the selected period"
        })));
    }

    selection.select_court(req.court.clone());
    selection.set_player_count(req.player_count);

    let today = Utc::now().date_naive();
    match build_booking(&selection, &state.facility, today) {
        Ok(new_booking) => {
            let record = state.store.lock().unwrap().add(new_booking);
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "booking": record
            })))
        }
        Err(err) => Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": err.to_string()
        }))),
    }
}

// Stored bookings endpoint, newest first
async fn list_bookings(state: web::Data<AppState>) -> Result<HttpResponse> {
    let store = state.store.lock().unwrap();
    Ok(HttpResponse::Ok().json(store.list()))
}

// Cancellation endpoint; idempotent for unknown ids
async fn cancel_booking(
    id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    state.store.lock().unwrap().remove(&id);
    Ok(HttpResponse::Ok().json(serde_json::json!({"success": true})))
}

pub async fn start_server(
    port: u16,
    facility: FacilityInfo,
    store: BookingStore,
) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState {
        facility,
        store: Mutex::new(store),
    });

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .route("/api/facility", web::get().to(get_facility))
            .route("/api/periods", web::get().to(get_periods))
            .route("/api/dates", web::get().to(get_dates))
            .route("/api/bookings", web::post().to(create_booking))
            .route("/api/bookings", web::get().to(list_bookings))
            .service(web::resource("/api/slots/{period}").route(web::get().to(get_slots)))
            .service(web::resource("/api/bookings/{id}").route(web::delete().to(cancel_booking)))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
