use crate::api::*;
use log::{debug, info, warn};
use rota::{
  alternative_paths, heuristic_path, path_avoiding, shortest_distance, shortest_path, weighted_path, Idx,
  RoadNetwork, RoutingError, SelectionPolicy, VehicleClass,
};
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tokio::sync::RwLock;
use warp::http::StatusCode;
use warp::{reject, Filter, Rejection, Reply};

/// State shared by every request.
///
/// Searches take the read lock. Requests which close roads while they run take the write lock.
pub struct Shared {
  pub network: RwLock<RoadNetwork>,
  pub policy: SelectionPolicy,
}

impl Shared {
  pub fn new(network: RoadNetwork, policy: SelectionPolicy) -> Arc<Self> {
    Arc::new(Shared {
      network: RwLock::new(network),
      policy,
    })
  }
}

#[derive(Debug, Error)]
pub enum ApiError {
  #[error("node {0} is not part of the road network")]
  UnknownNode(Idx),
  #[error("the road network has no nodes")]
  EmptyNetwork,
  #[error("{0}")]
  BadRequest(String),
}

impl reject::Reject for ApiError {}

impl ApiError {
  fn status(&self) -> StatusCode {
    match self {
      ApiError::UnknownNode(_) | ApiError::EmptyNetwork => StatusCode::NOT_FOUND,
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
    }
  }
}

impl From<RoutingError> for ApiError {
  fn from(e: RoutingError) -> Self {
    match e {
      RoutingError::UnknownNode(id) => ApiError::UnknownNode(id),
      other => ApiError::BadRequest(other.to_string()),
    }
  }
}

impl From<RequestError> for ApiError {
  fn from(e: RequestError) -> Self {
    ApiError::BadRequest(e.to_string())
  }
}

fn rejection<E: Into<ApiError>>(e: E) -> Rejection {
  reject::custom(e.into())
}

fn node_id(param: &str) -> Result<Idx, Rejection> {
  param
    .parse::<Idx>()
    .map_err(|_| rejection(ApiError::BadRequest(format!("`{}` is not a node id", param))))
}

async fn network_handler(shared: Arc<Shared>) -> Result<impl Reply, Rejection> {
  let network = shared.network.read().await;
  Ok(warp::reply::json(&NetworkResponse::new(&network)))
}

async fn snap_handler(coordinate: String, shared: Arc<Shared>) -> Result<impl Reply, Rejection> {
  let Coordinate(requested) = coordinate.parse::<Coordinate>().map_err(rejection)?;
  let network = shared.network.read().await;
  let snapped = network
    .snap_to_nearest_node(requested.y(), requested.x())
    .and_then(|node| SnappedWaypoint::new(&network, node, &requested))
    .ok_or_else(|| rejection(ApiError::EmptyNetwork))?;
  Ok(warp::reply::json(&snapped))
}

async fn distance_handler(from: String, to: String, shared: Arc<Shared>) -> Result<impl Reply, Rejection> {
  let (from, to) = (node_id(&from)?, node_id(&to)?);
  let network = shared.network.read().await;
  let distance = shortest_distance(&network, from, to).map_err(rejection)?;
  Ok(warp::reply::json(&DistanceResponse { from, to, distance }))
}

async fn path_handler(from: String, to: String, shared: Arc<Shared>) -> Result<impl Reply, Rejection> {
  let (from, to) = (node_id(&from)?, node_id(&to)?);
  let network = shared.network.read().await;
  let route = shortest_path(&network, from, to).map_err(rejection)?;
  Ok(warp::reply::json(&RouteResponse::new(&network, &route)))
}

async fn heuristic_handler(from: String, to: String, shared: Arc<Shared>) -> Result<impl Reply, Rejection> {
  let (from, to) = (node_id(&from)?, node_id(&to)?);
  let network = shared.network.read().await;
  let route = heuristic_path(&network, from, to).map_err(rejection)?;
  Ok(warp::reply::json(&RouteResponse::new(&network, &route)))
}

async fn weighted_handler(
  from: String,
  to: String,
  vehicle: String,
  shared: Arc<Shared>,
) -> Result<impl Reply, Rejection> {
  let (from, to) = (node_id(&from)?, node_id(&to)?);
  let vehicle = vehicle
    .parse::<VehicleClass>()
    .map_err(|e| rejection(ApiError::BadRequest(e.to_string())))?;
  let network = shared.network.read().await;
  let route = weighted_path(&network, from, to, vehicle).map_err(rejection)?;
  Ok(warp::reply::json(&RouteResponse::new(&network, &route)))
}

async fn alternatives_handler(
  from: String,
  to: String,
  k: String,
  shared: Arc<Shared>,
) -> Result<impl Reply, Rejection> {
  let (from, to) = (node_id(&from)?, node_id(&to)?);
  let k = k
    .parse::<usize>()
    .map_err(|_| rejection(ApiError::BadRequest(format!("`{}` is not a path count", k))))?;
  let mut network = shared.network.write().await;
  let paths = alternative_paths(&mut network, from, to, k).map_err(rejection)?;
  let paths: Vec<_> = paths
    .iter()
    .map(|alternative| AlternativeView::new(&network, alternative))
    .collect();
  Ok(warp::reply::json(&AlternativesResponse { from, to, paths }))
}

/// Distance between the ends of a road before and while it is closed. The road is back in place when the
/// response is sent.
async fn closure_handler(from: String, to: String, shared: Arc<Shared>) -> Result<impl Reply, Rejection> {
  let (from, to) = (node_id(&from)?, node_id(&to)?);
  let mut network = shared.network.write().await;
  let before = shortest_distance(&network, from, to).map_err(rejection)?;
  let road = network.road_distance(from, to);
  let detour = path_avoiding(&mut network, from, to, &[(from, to)]).map_err(rejection)?;
  info!(
    "Closing road {} <-> {}: {:.3} km -> {:.3} km",
    from, to, before, detour.cost
  );
  Ok(warp::reply::json(&ClosureResponse {
    from,
    to,
    road,
    before,
    after: detour.cost,
    detour: detour.path,
  }))
}

async fn journey_handler(
  waypoints: String,
  query: JourneyQuery,
  shared: Arc<Shared>,
) -> Result<impl Reply, Rejection> {
  let waypoints = waypoints.parse::<Waypoints>().map_err(rejection)?;
  info!("Journey request for a {}: {}", query.vehicle, waypoints);
  let timer = Instant::now();

  let mut network = shared.network.write().await;
  let mut nodes = Vec::new();
  let mut snapped = Vec::new();
  for Coordinate(requested) in waypoints.0.iter() {
    let waypoint = network
      .snap_to_nearest_node(requested.y(), requested.x())
      .and_then(|node| Some((node, SnappedWaypoint::new(&network, node, requested)?)))
      .ok_or_else(|| rejection(ApiError::EmptyNetwork))?;
    nodes.push(waypoint.0);
    snapped.push(waypoint.1);
  }

  let journey = shared
    .policy
    .plan_journey(&mut network, nodes[0], nodes[1], nodes[2], query.vehicle)
    .map_err(rejection)?;
  debug!(
    "Journey planned in {:.1} ms",
    timer.elapsed().as_secs_f64() * 1000.0
  );
  Ok(warp::reply::json(&JourneyResponse::new(&network, &journey, snapped)))
}

async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
  let (status, message) = if let Some(e) = err.find::<ApiError>() {
    (e.status(), e.to_string())
  } else if let Some(e) = err.find::<reject::InvalidQuery>() {
    (StatusCode::BAD_REQUEST, e.to_string())
  } else if err.is_not_found() {
    (StatusCode::NOT_FOUND, String::from("Not found"))
  } else if let Some(e) = err.find::<warp::cors::CorsForbidden>() {
    (StatusCode::FORBIDDEN, e.to_string())
  } else if err.find::<reject::MethodNotAllowed>().is_some() {
    (StatusCode::METHOD_NOT_ALLOWED, String::from("Method not allowed"))
  } else {
    warn!("Unhandled rejection: {:?}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, String::from("Internal error"))
  };

  let body = warp::reply::json(&ErrorResponse {
    code: status.as_u16(),
    message,
  });
  Ok(warp::reply::with_status(body, status))
}

pub fn routes(shared: Arc<Shared>) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
  let shared = warp::any().map(move || Arc::clone(&shared));

  let network = warp::path!("network")
    .and(shared.clone())
    .and_then(network_handler);
  let snap = warp::path!("snap" / String)
    .and(shared.clone())
    .and_then(snap_handler);
  let distance = warp::path!("distance" / String / String)
    .and(shared.clone())
    .and_then(distance_handler);
  let path = warp::path!("path" / String / String)
    .and(shared.clone())
    .and_then(path_handler);
  let heuristic = warp::path!("heuristic" / String / String)
    .and(shared.clone())
    .and_then(heuristic_handler);
  let weighted = warp::path!("weighted" / String / String / String)
    .and(shared.clone())
    .and_then(weighted_handler);
  let alternatives = warp::path!("alternatives" / String / String / String)
    .and(shared.clone())
    .and_then(alternatives_handler);
  let closure = warp::path!("closure" / String / String)
    .and(shared.clone())
    .and_then(closure_handler);
  let journey = warp::path!("journey" / String)
    .and(warp::query::<JourneyQuery>())
    .and(shared)
    .and_then(journey_handler);

  let cors = warp::cors().allow_any_origin();

  warp::get()
    .and(
      network
        .or(snap)
        .or(distance)
        .or(path)
        .or(heuristic)
        .or(weighted)
        .or(alternatives)
        .or(closure)
        .or(journey),
    )
    .with(cors)
    .recover(handle_rejection)
}
