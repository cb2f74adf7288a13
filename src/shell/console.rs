use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use super::command::ShellCommand;
use super::pages;
use super::session::{Role, Session};
use crate::dialogue::{RandomPicker, ReplyPicker, ResponseSelector};
use crate::telemetry::{TelemetryEvent, TelemetrySnapshot};

/// What the driver should do with one handled line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellOutput {
    Print(String),
    Silent,
    Quit(String),
}

/// Interactive front end: one session, one selector, one picker.
pub struct Console<P: ReplyPicker = RandomPicker> {
    selector: ResponseSelector,
    session: Session,
    picker: P,
}

impl<P: ReplyPicker> Console<P> {
    pub fn new(selector: ResponseSelector, session: Session, picker: P) -> Self {
        Self {
            selector,
            session,
            picker,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn handle_line(&mut self, line: &str) -> ShellOutput {
        match ShellCommand::parse(line) {
            ShellCommand::Empty => ShellOutput::Silent,
            ShellCommand::Say(text) => ShellOutput::Print(self.converse(&text)),
            ShellCommand::History => ShellOutput::Print(self.render_history()),
            ShellCommand::Tips => ShellOutput::Print(pages::HEALTH_TIPS.to_string()),
            ShellCommand::About => ShellOutput::Print(pages::ABOUT.to_string()),
            ShellCommand::Help => ShellOutput::Print(pages::HELP.to_string()),
            ShellCommand::SignIn => {
                self.session.set_signed_in(true);
                ShellOutput::Print("Signed in.".to_string())
            }
            ShellCommand::SignOut => {
                self.session.set_signed_in(false);
                ShellOutput::Print("Signed out.".to_string())
            }
            ShellCommand::Stats => {
                ShellOutput::Print(render_stats(&self.session.telemetry.snapshot()))
            }
            ShellCommand::Quit => ShellOutput::Quit(pages::FAREWELL.to_string()),
            ShellCommand::Unknown(name) => {
                debug!("Unknown command: /{}", name);
                ShellOutput::Print(format!("Unknown command /{}. Type /help.", name))
            }
        }
    }

    fn converse(&mut self, text: &str) -> String {
        self.session.push(Role::User, text);

        let reply = self
            .selector
            .respond(text, self.session.signed_in(), &mut self.picker);
        debug!("Reply kind: {:?}", reply.kind());
        self.session.telemetry.record(TelemetryEvent::reply(&reply));

        let rendered = reply.render();
        self.session.push(Role::Assistant, rendered.clone());
        rendered
    }

    fn render_history(&self) -> String {
        if self.session.history_len() == 0 {
            return "No messages yet.".to_string();
        }
        self.session
            .history()
            .map(|turn| {
                let who = match turn.role {
                    Role::User => "You",
                    Role::Assistant => "HealthBot",
                };
                format!("{}: {}", who, turn.text)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Reads lines until EOF or `/quit`, writing each response followed by a blank line.
    pub async fn run<R, W>(&mut self, reader: R, mut writer: W) -> anyhow::Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        write_block(&mut writer, pages::BANNER).await?;

        let mut lines = BufReader::new(reader).lines();
        while let Some(line) = lines.next_line().await.context("reading input")? {
            match self.handle_line(&line) {
                ShellOutput::Silent => continue,
                ShellOutput::Print(text) => write_block(&mut writer, &text).await?,
                ShellOutput::Quit(text) => {
                    write_block(&mut writer, &text).await?;
                    break;
                }
            }
        }

        let summary = self.finish();
        info!("{:?}", summary);
        Ok(())
    }

    /// Records and returns the session summary event.
    pub fn finish(&mut self) -> TelemetryEvent {
        let summary = self.session.telemetry.aggregate_session(self.session.id());
        if let TelemetryEvent::SessionSummary { turns: 0, .. } = summary {
            warn!("Session {} ended without any replies", self.session.id());
        }
        self.session.telemetry.record(summary.clone());
        summary
    }
}

async fn write_block<W>(writer: &mut W, text: &str) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer
        .write_all(format!("{}\n\n", text).as_bytes())
        .await
        .context("writing output")?;
    writer.flush().await.context("flushing output")?;
    Ok(())
}

pub fn render_stats(snap: &TelemetrySnapshot) -> String {
    let r = &snap.reply_stats;
    format!(
        "Replies: {}\nGreetings: {}\nTopics: {}\nDiagnoses: {} single, {} multi (avg {:.1} candidates)\nFallbacks: {}",
        r.total,
        r.greetings,
        r.topics,
        r.single_diagnoses,
        r.multi_diagnoses,
        r.avg_candidates,
        r.fallbacks,
    )
}
