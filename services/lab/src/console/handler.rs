//! services/lab/src/console/handler.rs
//!
//! This is the main entry point and control loop for a console session.
//! Each input line holds one `ClientCommand`; each command gets exactly one
//! `ServerReply` line back. Errors never end the loop, only EOF does.

use physics_lab_core::domain::EntityId;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::console::measurements as m;
use crate::console::protocol::{AccountView, ClientCommand, ServerReply};
use crate::console::staff;
use crate::console::state::AppState;
use crate::error::{LabError, LabResult};

/// Runs one command against the state and converts the outcome into a reply.
pub fn handle_command(state: &AppState, command: ClientCommand) -> ServerReply {
    debug!(?command, "handling command");
    match dispatch(state, command) {
        Ok(reply) => reply,
        Err(e) => {
            warn!("command failed: {}", e);
            ServerReply::Error {
                message: e.to_string(),
            }
        }
    }
}

fn rows<T, V>(records: Vec<T>) -> Vec<V>
where
    V: for<'a> From<&'a T>,
{
    records.iter().map(V::from).collect()
}

fn created(id: LabResult<EntityId>) -> LabResult<ServerReply> {
    id.map(|id| ServerReply::Created { id })
}

fn done(outcome: LabResult<()>) -> LabResult<ServerReply> {
    outcome.map(|()| ServerReply::Done)
}

fn dispatch(state: &AppState, command: ClientCommand) -> LabResult<ServerReply> {
    use ClientCommand as C;

    match command {
        // --- Session ---
        C::Login { username, password } => {
            let user = staff::login(state, &username, &password)?;
            Ok(ServerReply::LoggedIn {
                user: AccountView::from(&user),
            })
        }
        C::CurrentUser => Ok(ServerReply::CurrentUser {
            user: state.users.current_user().as_ref().map(AccountView::from),
        }),
        C::ChangePassword {
            password,
            confirmation,
        } => done(staff::change_password(state, &password, &confirmation)),
        C::UpdateProfile { form } => done(staff::update_profile(state, &form)),

        // --- Staff ---
        C::RegisterEmployee { form } => created(staff::register_employee(state, &form)),
        C::ModifyEmployee { id, form } => done(staff::modify_employee(state, id, &form)),
        C::DeleteEmployee { id } => done(staff::delete_employee(state, id)),
        C::ListStaff { filter } => Ok(ServerReply::Staff {
            rows: rows(staff::list_staff(state, &filter)?),
        }),

        // --- Measurements ---
        C::AddConsume { form } => created(m::add_consume(state, &form)),
        C::ModifyConsume { id, form } => done(m::modify_consume(state, id, &form)),
        C::DeleteConsume { id } => done(m::delete_consume(state, id)),
        C::ListConsumes { filter } => Ok(ServerReply::Consumes {
            rows: rows(m::list_consumes(state, &filter)?),
        }),

        C::AddField { form } => created(m::add_field(state, &form)),
        C::ModifyField { id, form } => done(m::modify_field(state, id, &form)),
        C::DeleteField { id } => done(m::delete_field(state, id)),
        C::ListFields => Ok(ServerReply::Fields {
            rows: rows(m::list_fields(state)?),
        }),

        C::AddForce { form } => created(m::add_force(state, &form)),
        C::ModifyForce { id, form } => done(m::modify_force(state, id, &form)),
        C::DeleteForce { id } => done(m::delete_force(state, id)),
        C::ListForces => Ok(ServerReply::Forces {
            rows: rows(m::list_forces(state)?),
        }),

        C::AddPotential { form } => created(m::add_potential(state, &form)),
        C::ModifyPotential { id, form } => done(m::modify_potential(state, id, &form)),
        C::DeletePotential { id } => done(m::delete_potential(state, id)),
        C::ListPotentials => Ok(ServerReply::Potentials {
            rows: rows(m::list_potentials(state)?),
        }),

        C::AddTorque { form } => created(m::add_torque(state, &form)),
        C::ModifyTorque { id, form } => done(m::modify_torque(state, id, &form)),
        C::DeleteTorque { id } => done(m::delete_torque(state, id)),
        C::ListTorques => Ok(ServerReply::Torques {
            rows: rows(m::list_torques(state)?),
        }),
    }
}

/// Reads commands from `reader` until EOF, writing one reply line per command.
pub async fn run<R, W>(state: &AppState, mut reader: R, mut writer: W) -> LabResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();
    let mut handled = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        // Undecodable bytes get an error reply like any other malformed line.
        let reply = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => match serde_json::from_str::<ClientCommand>(line.trim()) {
                Ok(command) => handle_command(state, command),
                Err(e) => {
                    warn!("Rejected malformed command: {}", e);
                    ServerReply::Error {
                        message: LabError::from(e).to_string(),
                    }
                }
            },
            Err(e) => {
                warn!("Rejected a line that is not UTF-8: {}", e);
                ServerReply::Error {
                    message: format!("Command is not valid UTF-8: {}", e),
                }
            }
        };

        let mut encoded = serde_json::to_string(&reply)?;
        encoded.push('\n');
        writer.write_all(encoded.as_bytes()).await?;
        writer.flush().await?;
        handled += 1;
    }

    info!(handled, "console input closed");
    Ok(())
}
