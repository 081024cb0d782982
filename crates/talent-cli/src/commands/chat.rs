//! Recruiter/applicant chat commands.
//!
//! `open` is an interactive loop over one live room. Stdin lines are sent to
//! the room; a line that cannot be sent stays saved as the room's draft.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};

use talent_auth::Route;
use talent_core::AppError;
use talent_core::types::RoomId;
use talent_entity::chat::{ChatMessage, ChatRoom};
use talent_entity::user::CurrentUser;
use talent_realtime::{ChatSession, ChatUpdate, Notice, NoticeLevel, WsTransport};

use crate::context::Context;
use crate::output::{self, OutputFormat};

const NOTICE_BUFFER: usize = 32;

/// Arguments for chat commands
#[derive(Debug, Args)]
pub struct ChatArgs {
    #[command(subcommand)]
    pub command: ChatCommand,
}

/// Chat subcommands
#[derive(Debug, Subcommand)]
pub enum ChatCommand {
    /// List the conversations available to you
    Rooms,
    /// Print a room's message history
    History { room: RoomId },
    /// Post one message without opening the live socket
    Post { room: RoomId, content: String },
    /// Join a room interactively (defaults to the first room)
    Open { room: Option<RoomId> },
}

#[derive(Debug, Serialize, Tabled)]
struct RoomRow {
    room: String,
    job: String,
    applicant: String,
    recruiter: String,
}

impl From<&ChatRoom> for RoomRow {
    fn from(r: &ChatRoom) -> Self {
        Self {
            room: r.application_id.to_string(),
            job: output::truncate(&r.job_title, 40),
            applicant: r
                .applicant_name
                .clone()
                .or_else(|| r.applicant_username.clone())
                .unwrap_or_else(|| r.applicant_id.short()),
            recruiter: r
                .recruiter_name
                .clone()
                .or_else(|| r.recruiter_username.clone())
                .unwrap_or_else(|| r.recruiter_id.short()),
        }
    }
}

/// Execute chat commands
pub async fn execute(args: &ChatArgs, ctx: &Context) -> Result<(), AppError> {
    let user = ctx.enter(Route::Chat).await?;

    match &args.command {
        ChatCommand::Rooms => {
            let rooms = ctx.client.list_chat_rooms().await?;
            let rows: Vec<RoomRow> = rooms.iter().map(RoomRow::from).collect();
            output::print_list(&rows, ctx.format);
        }
        ChatCommand::History { room } => {
            let messages = ctx.client.list_chat_messages(*room).await?;
            match ctx.format {
                OutputFormat::Json => output::print_item(&messages, ctx.format),
                OutputFormat::Table => {
                    for message in &messages {
                        println!("{}", render(message, message.sender_id == user.id));
                    }
                }
            }
        }
        ChatCommand::Post { room, content } => {
            let trimmed = content.trim();
            if trimmed.is_empty() {
                return Err(AppError::validation("Message is empty"));
            }
            let message = ctx.client.post_chat_message(*room, trimmed).await?;
            output::print_success(&format!("Sent ({})", message.id.short()));
        }
        ChatCommand::Open { room } => open(ctx, &user, *room).await?,
    }

    Ok(())
}

async fn open(ctx: &Context, user: &CurrentUser, room: Option<RoomId>) -> Result<(), AppError> {
    let room = match room {
        Some(room) => room,
        None => {
            let rooms = ctx.client.list_chat_rooms().await?;
            match rooms.first() {
                Some(first) => first.application_id,
                None => {
                    output::print_warning("No conversations yet");
                    return Ok(());
                }
            }
        }
    };

    let (notice_tx, mut notices) = mpsc::channel(NOTICE_BUFFER);
    let mut session = ChatSession::new(
        user.id,
        ctx.client.origin(),
        ctx.tokens().clone(),
        Arc::new(WsTransport::new(&ctx.config.realtime)),
        Arc::new(ctx.client.clone()),
        notice_tx,
    );

    enter_room(&mut session, room).await?;
    let mut live = session.is_connected();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_input(&line) {
                    Input::Quit => break,
                    Input::Switch(Some(next)) => {
                        enter_room(&mut session, next).await?;
                        live = session.is_connected();
                    }
                    Input::Switch(None) => output::print_error("Invalid room id"),
                    Input::Text(text) => match session.send(text).await {
                        Ok(true) => {}
                        Ok(false) if text.trim().is_empty() => {}
                        Ok(false) => output::print_warning("Not connected; message kept as draft"),
                        Err(e) => output::print_error(&e.message),
                    },
                }
            }
            update = session.next_update(), if live => match update {
                Some(ChatUpdate::Message(message)) => {
                    println!("{}", render(&message, session.is_mine(&message)));
                }
                Some(ChatUpdate::Closed { code, .. }) => {
                    info!(code = ?code, "Chat room closed");
                    live = false;
                }
                None => live = false,
            },
            Some(notice) = notices.recv() => print_notice(&notice),
        }
    }

    session.leave().await;
    while let Ok(notice) = notices.try_recv() {
        print_notice(&notice);
    }
    Ok(())
}

async fn enter_room(session: &mut ChatSession, room: RoomId) -> Result<(), AppError> {
    session.select_room(room).await?;
    println!("── room {room} ── /room <id> to switch, /quit to leave");
    for message in session.messages() {
        println!("{}", render(message, session.is_mine(message)));
    }
    if !session.draft().is_empty() {
        output::print_kv("Draft", session.draft());
    }
    Ok(())
}

fn print_notice(notice: &Notice) {
    match notice.level {
        NoticeLevel::Info => output::print_warning(&notice.message),
        NoticeLevel::Error => {
            warn!(notice = %notice.message, "Chat notice");
            output::print_error(&notice.message);
        }
    }
}

fn render(message: &ChatMessage, mine: bool) -> String {
    let who = if mine {
        "you".to_string()
    } else {
        message
            .sender_name
            .clone()
            .or_else(|| message.sender_username.clone())
            .unwrap_or_else(|| message.sender_id.short())
    };
    format!("[{}] {who}: {}", message.created_at.time_of_day(), message.content)
}

#[derive(Debug)]
enum Input<'a> {
    Quit,
    Switch(Option<RoomId>),
    Text(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    let trimmed = line.trim();
    if trimmed == "/quit" {
        return Input::Quit;
    }
    if let Some(id) = trimmed.strip_prefix("/room ") {
        return Input::Switch(id.trim().parse().ok());
    }
    Input::Text(line)
}
