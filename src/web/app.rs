use std::sync::Arc;

use poem::{
    Endpoint, EndpointExt, Route, Server, get, handler,
    listener::TcpListener,
    middleware::Cors,
    post,
    web::{Data, Form, Json, Query},
};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::info;

use crate::{
    routing::routing::{RoutePlan, RouteQuery, route},
    structures::{BookingLedger, BookingRequest, Confirmation, NetworkGraph, ProcessOutcome, Station},
};

/// The graph is immutable after startup; the ledger sits behind a single
/// lock, so booking operations are serialized.
pub struct AppState {
    pub graph: NetworkGraph,
    pub ledger: Mutex<BookingLedger>,
}

#[derive(Deserialize)]
struct RouteParams {
    from: u32,
    to: u32,
}

#[derive(Deserialize)]
struct AddBookingForm {
    name: String,
    from: u32,
    to: u32,
}

#[derive(Serialize)]
struct AddBookingResponse {
    success: bool,
    id: u32,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Serialize)]
#[serde(untagged)]
enum ProcessResponse {
    Confirmed(Box<Confirmation>),
    Error(ErrorResponse),
}

#[handler]
async fn stations(Data(state): Data<&Arc<AppState>>) -> Json<Vec<Station>> {
    Json(state.graph.all_stations())
}

#[handler]
async fn find_route(
    Data(state): Data<&Arc<AppState>>,
    Query(params): Query<RouteParams>,
) -> Json<RoutePlan> {
    let query = RouteQuery {
        from: params.from,
        to: params.to,
    };
    Json(route(&state.graph, &query))
}

#[handler]
async fn add_booking(
    Data(state): Data<&Arc<AppState>>,
    Form(form): Form<AddBookingForm>,
) -> Json<AddBookingResponse> {
    let id = state
        .ledger
        .lock()
        .await
        .submit(&form.name, form.from, form.to);
    Json(AddBookingResponse { success: true, id })
}

#[handler]
async fn process_booking(Data(state): Data<&Arc<AppState>>) -> Json<ProcessResponse> {
    let outcome = state.ledger.lock().await.process_next(&state.graph);

    let response = match outcome {
        ProcessOutcome::Empty => ProcessResponse::Error(ErrorResponse {
            error: "No pending bookings".to_string(),
        }),
        ProcessOutcome::NoRoute(_) => ProcessResponse::Error(ErrorResponse {
            error: "No route available".to_string(),
        }),
        ProcessOutcome::Confirmed(confirmation) => {
            ProcessResponse::Confirmed(Box::new(confirmation))
        }
    };
    Json(response)
}

#[handler]
async fn pending_bookings(Data(state): Data<&Arc<AppState>>) -> Json<Vec<BookingRequest>> {
    Json(state.ledger.lock().await.list_pending())
}

#[handler]
async fn completed_bookings(Data(state): Data<&Arc<AppState>>) -> Json<Vec<BookingRequest>> {
    Json(state.ledger.lock().await.list_completed().to_vec())
}

pub fn app(state: Arc<AppState>) -> impl Endpoint {
    Route::new()
        .at("/stations", get(stations))
        .at("/findRoute", get(find_route))
        .at("/addBooking", post(add_booking))
        .at("/processBooking", post(process_booking))
        .at("/pendingBookings", get(pending_bookings))
        .at("/completedBookings", get(completed_bookings))
        .with(Cors::new())
        .data(state)
}

pub async fn server(state: Arc<AppState>, address: &str) -> std::io::Result<()> {
    info!("serving on {address}");
    Server::new(TcpListener::bind(address.to_string()))
        .run(app(state))
        .await
}
