use abv_core::ID;
use abv_dto::*;
use abv_hosting::Lobby;
use abv_hosting::Session;
use abv_hosting::SessionError;
use abv_stepper::OutOfRange;
use abv_stepper::Signal;
use abv_tree::RawTree;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

fn failure(e: SessionError) -> HttpResponse {
    match e {
        SessionError::Invalid(ref invalid) => HttpResponse::UnprocessableEntity().json(ApiError::from(invalid)),
        SessionError::NotFound(_) => HttpResponse::NotFound().json(ApiError::new(e)),
        SessionError::Full(_) => HttpResponse::ServiceUnavailable().json(ApiError::new(e)),
        SessionError::OutOfRange(_) => HttpResponse::BadRequest().json(ApiError::new(e)),
    }
}

fn id(path: uuid::Uuid) -> ID<Session> {
    ID::from(path)
}

fn moved(session: &Session, signal: Signal) -> ApiMove {
    ApiMove {
        signal,
        cursor: ApiCursor::from(session.stepper()),
    }
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(ApiHealth {
        status: String::from("healthy"),
        service: String::from(abv_core::SERVICE_NAME),
        version: String::from(abv_core::SERVICE_VERSION),
    })
}
pub async fn missing() -> impl Responder {
    HttpResponse::NotFound().json(ApiError::new("no such route"))
}

pub async fn open(lobby: web::Data<Lobby>, body: web::Json<RawTree>) -> impl Responder {
    match lobby.open(body.into_inner()).await {
        Ok((id, trace)) => HttpResponse::Created().json(ApiSession::new(id.to_string(), &trace)),
        Err(e) => failure(e),
    }
}
pub async fn replace(
    lobby: web::Data<Lobby>,
    path: web::Path<uuid::Uuid>,
    body: web::Json<RawTree>,
) -> impl Responder {
    let id = id(path.into_inner());
    match lobby.replace(id, body.into_inner()).await {
        Ok(trace) => HttpResponse::Ok().json(ApiSession::new(id.to_string(), &trace)),
        Err(e) => failure(e),
    }
}
pub async fn close(lobby: web::Data<Lobby>, path: web::Path<uuid::Uuid>) -> impl Responder {
    let id = id(path.into_inner());
    match lobby.close(id).await {
        Ok(()) => HttpResponse::Ok().json(ApiClosed {
            session: id.to_string(),
            status: String::from("closed"),
        }),
        Err(e) => failure(e),
    }
}

pub async fn cursor(lobby: web::Data<Lobby>, path: web::Path<uuid::Uuid>) -> impl Responder {
    match lobby
        .read(id(path.into_inner()), |s| ApiCursor::from(s.stepper()))
        .await
    {
        Ok(cursor) => HttpResponse::Ok().json(cursor),
        Err(e) => failure(e),
    }
}
pub async fn trace(lobby: web::Data<Lobby>, path: web::Path<uuid::Uuid>) -> impl Responder {
    match lobby.read(id(path.into_inner()), |s| s.trace().clone()).await {
        Ok(trace) => HttpResponse::Ok().json(&*trace),
        Err(e) => failure(e),
    }
}
pub async fn snapshot(lobby: web::Data<Lobby>, path: web::Path<uuid::Uuid>) -> impl Responder {
    match lobby.read(id(path.into_inner()), |s| s.snapshot()).await {
        Ok(snapshot) => HttpResponse::Ok().json(snapshot),
        Err(e) => failure(e),
    }
}
pub async fn tree(lobby: web::Data<Lobby>, path: web::Path<uuid::Uuid>) -> impl Responder {
    match lobby.read(id(path.into_inner()), |s| s.tree().export()).await {
        Ok(raw) => HttpResponse::Ok().json(raw),
        Err(e) => failure(e),
    }
}

pub async fn forward(lobby: web::Data<Lobby>, path: web::Path<uuid::Uuid>) -> impl Responder {
    match lobby
        .write(id(path.into_inner()), |s| {
            let signal = s.stepper_mut().forward();
            moved(s, signal)
        })
        .await
    {
        Ok(step) => HttpResponse::Ok().json(step),
        Err(e) => failure(e),
    }
}
pub async fn backward(lobby: web::Data<Lobby>, path: web::Path<uuid::Uuid>) -> impl Responder {
    match lobby
        .write(id(path.into_inner()), |s| {
            let signal = s.stepper_mut().backward();
            moved(s, signal)
        })
        .await
    {
        Ok(step) => HttpResponse::Ok().json(step),
        Err(e) => failure(e),
    }
}
pub async fn reset(lobby: web::Data<Lobby>, path: web::Path<uuid::Uuid>) -> impl Responder {
    match lobby
        .write(id(path.into_inner()), |s| {
            let signal = s.stepper_mut().reset();
            moved(s, signal)
        })
        .await
    {
        Ok(step) => HttpResponse::Ok().json(step),
        Err(e) => failure(e),
    }
}
pub async fn jump(lobby: web::Data<Lobby>, path: web::Path<(uuid::Uuid, usize)>) -> impl Responder {
    let (session, index) = path.into_inner();
    match lobby
        .write(id(session), |s| -> Result<ApiMove, OutOfRange> {
            let signal = s
                .stepper_mut()
                .jump(index)
                .map(|step| Signal::Moved(step.cloned()))?;
            Ok(moved(s, signal))
        })
        .await
        .and_then(|jumped| jumped.map_err(SessionError::OutOfRange))
    {
        Ok(step) => HttpResponse::Ok().json(step),
        Err(e) => failure(e),
    }
}
