use std::time::{Duration, Instant};

use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::room::{PlayerSeat, Slot};
use crate::errors::domain::DomainError;
use crate::state::app_state::AppState;
use crate::utils::room_code::normalize_room_id;
use crate::ws::hub::StatePush;
use crate::ws::protocol::{ClientMsg, ServerMsg};

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(20);
const CLIENT_TIMEOUT: Duration = Duration::from_secs(40);

pub async fn upgrade(
    req: HttpRequest,
    stream: web::Payload,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let conn_id = Uuid::new_v4();
    let session = WsSession::new(conn_id, app_state);
    ws::start(session, &req, stream)
}

pub struct WsSession {
    conn_id: Uuid,
    app_state: web::Data<AppState>,

    /// The seat this socket currently holds, once bound by create or join.
    seat: Option<(String, Slot)>,

    last_heartbeat: Instant,
}

impl WsSession {
    fn new(conn_id: Uuid, app_state: web::Data<AppState>) -> Self {
        Self {
            conn_id,
            app_state,
            seat: None,
            last_heartbeat: Instant::now(),
        }
    }

    fn send_json(ctx: &mut ws::WebsocketContext<Self>, msg: &ServerMsg) {
        match serde_json::to_string(msg) {
            Ok(payload) => ctx.text(payload),
            Err(err) => warn!(error = %err, "[WS SESSION] failed to serialize outbound message"),
        }
    }

    fn send_error(ctx: &mut ws::WebsocketContext<Self>, err: &DomainError) {
        Self::send_json(
            ctx,
            &ServerMsg::ErrorMsg {
                text: err.user_message(),
            },
        );
    }

    fn start_heartbeat(&mut self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |actor, ctx| {
            if Instant::now().duration_since(actor.last_heartbeat) > CLIENT_TIMEOUT {
                warn!(conn_id = %actor.conn_id, "[WS SESSION] heartbeat timed out");
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Normal)));
                ctx.stop();
                return;
            }
            ctx.ping(b"keepalive");
        });
    }

    fn bind_seat(&mut self, ctx: &mut ws::WebsocketContext<Self>, room_id: String, slot: Slot) {
        let recipient = ctx.address().recipient::<StatePush>();
        self.app_state.hub().register(room_id.clone(), slot, recipient);
        self.seat = Some((room_id, slot));
    }

    /// Release the bound seat, if any, and refresh the remaining occupant.
    fn leave_current(&mut self) {
        let Some((room_id, slot)) = self.seat.take() else {
            return;
        };
        self.app_state.hub().unregister(&room_id, slot);
        let report = self.app_state.rooms().leave(&room_id, slot);
        if report.destroyed {
            info!(room_id = %room_id, "[WS SESSION] room destroyed");
        } else {
            self.app_state.hub().deliver(&room_id, report.views);
        }
    }

    fn handle_client_msg(&mut self, cmd: ClientMsg, ctx: &mut ws::WebsocketContext<Self>) {
        match cmd {
            ClientMsg::CreateRoom {
                display_name,
                external_id,
            } => {
                self.leave_current();
                let report = self.app_state.rooms().create(PlayerSeat {
                    display_name,
                    external_id,
                });
                info!(
                    conn_id = %self.conn_id,
                    room_id = %report.room_id,
                    "[WS SESSION] room created"
                );

                self.bind_seat(ctx, report.room_id.clone(), report.slot);

                // Ordering guarantee: roomCreated then state
                Self::send_json(
                    ctx,
                    &ServerMsg::RoomCreated {
                        room_id: report.room_id.clone(),
                        your_slot: report.slot,
                    },
                );
                self.app_state.hub().deliver(&report.room_id, report.views);
            }

            ClientMsg::JoinRoom {
                room_id,
                display_name,
                external_id,
            } => {
                self.leave_current();
                let seat = PlayerSeat {
                    display_name,
                    external_id,
                };
                match self.app_state.rooms().join(&room_id, seat) {
                    Ok(report) => {
                        info!(
                            conn_id = %self.conn_id,
                            room_id = %report.room_id,
                            slot = ?report.slot,
                            "[WS SESSION] joined room"
                        );

                        self.bind_seat(ctx, report.room_id.clone(), report.slot);

                        // Ordering guarantee: joined then state
                        Self::send_json(
                            ctx,
                            &ServerMsg::Joined {
                                room_id: report.room_id.clone(),
                                your_slot: report.slot,
                            },
                        );
                        self.app_state.hub().deliver(&report.room_id, report.views);
                    }
                    Err(err) => Self::send_error(ctx, &err),
                }
            }

            ClientMsg::PlayCard { room_id, card_id } => {
                // Plays from sockets that never took a seat are dropped.
                let Some((bound_room, slot)) = self.seat.clone() else {
                    return;
                };
                // The payload must name the room this socket is seated in.
                if normalize_room_id(&room_id) != bound_room {
                    return;
                }

                match self.app_state.rooms().play(&bound_room, slot, &card_id) {
                    Ok(report) => {
                        self.app_state.hub().deliver(&bound_room, report.views);

                        if let Some(event) = report.finished {
                            let notifier = self.app_state.notifier();
                            tokio::spawn(async move {
                                if let Err(err) = notifier.match_finished(&event).await {
                                    warn!(
                                        error = %err,
                                        room_id = %event.room_id,
                                        "failed to send match notification"
                                    );
                                }
                            });
                        }
                    }
                    // Rooms can vanish between frames; nothing to tell the client.
                    Err(DomainError::RoomNotFound) => {}
                    Err(err) => Self::send_error(ctx, &err),
                }
            }

            ClientMsg::LeaveRoom => {
                self.leave_current();
            }
        }
    }
}

impl Actor for WsSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!(conn_id = %self.conn_id, "[WS SESSION] started");
        self.start_heartbeat(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.leave_current();
        info!(conn_id = %self.conn_id, "[WS SESSION] stopped");
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for WsSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(payload)) => {
                self.last_heartbeat = Instant::now();
                ctx.pong(&payload);
            }
            Ok(ws::Message::Pong(_)) => {
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Text(text)) => {
                self.last_heartbeat = Instant::now();

                let parsed: Result<ClientMsg, _> = serde_json::from_str(&text);
                match parsed {
                    Ok(cmd) => self.handle_client_msg(cmd, ctx),
                    Err(err) => {
                        warn!(
                            conn_id = %self.conn_id,
                            error = %err,
                            "[WS SESSION] dropping malformed frame"
                        );
                    }
                }
            }
            Ok(ws::Message::Binary(_)) => {
                self.last_heartbeat = Instant::now();
                warn!(conn_id = %self.conn_id, "[WS SESSION] dropping binary frame");
            }
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Ok(ws::Message::Continuation(_)) => {
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Nop) => {
                self.last_heartbeat = Instant::now();
            }
            Err(err) => {
                warn!(
                    conn_id = %self.conn_id,
                    error = %err,
                    "[WS SESSION] protocol error"
                );
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
                ctx.stop();
            }
        }
    }
}

impl Handler<StatePush> for WsSession {
    type Result = ();

    fn handle(&mut self, msg: StatePush, ctx: &mut Self::Context) -> Self::Result {
        Self::send_json(ctx, &ServerMsg::State(msg.0));
    }
}
