use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::Client;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::{
    classifier::{Classifier, ClassifierClient},
    composer::{
        input::{parse_line, HELP},
        view::{render_form, render_page_header, render_status},
        EmailComposer, Outcome,
    },
    config::AppConfig,
    infrastructure::{directories::ResolvedPaths, shutdown::Shutdown},
};

/// The page shell: mounts one composer on the terminal.
pub struct ComposerApp {
    _paths: ResolvedPaths,
    composer: EmailComposer<ClassifierClient>,
    shutdown: Shutdown,
    config: Arc<AppConfig>,
}

impl ComposerApp {
    pub fn initialize(config: AppConfig, paths: ResolvedPaths, shutdown: Shutdown) -> Result<Self> {
        let config = Arc::new(config);

        let http_client = Client::builder()
            .user_agent(format!("spam-composer/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;

        let classifier = Arc::new(ClassifierClient::new(
            http_client,
            config.classifier.clone(),
        ));

        Ok(Self {
            _paths: paths,
            composer: EmailComposer::new(classifier),
            shutdown,
            config,
        })
    }

    pub async fn run(self) -> Result<()> {
        let ComposerApp {
            _paths: _,
            mut composer,
            shutdown,
            config,
        } = self;

        tracing::info!("spam composer started");

        let input = BufReader::new(io::stdin());
        let mut output = io::stdout();
        let result = run_session(
            &mut composer,
            input,
            &mut output,
            &shutdown,
            config.ui.color,
        )
        .await;

        shutdown.trigger();
        tracing::info!("spam composer closed");
        result
    }
}

/// Drives one compose session until `:quit`, end of input or shutdown.
///
/// On end of input the session waits for outstanding sends, so piped input
/// still reports its final status, unless shutdown fires first. `:quit` and
/// shutdown never wait.
pub async fn run_session<C, R, W>(
    composer: &mut EmailComposer<C>,
    input: R,
    output: &mut W,
    shutdown: &Shutdown,
    color: bool,
) -> Result<()>
where
    C: Classifier,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut listener = shutdown.subscribe();
    let mut status_rx = composer.watch_status();

    emit(output, &render_page_header()).await?;
    emit(output, &render_form(composer.draft(), composer.status(), color)).await?;

    loop {
        tokio::select! {
            _ = listener.notified() => {
                tracing::info!(target: "composer", "shutdown requested; closing the form");
                return Ok(());
            }
            Ok(()) = status_rx.changed() => {
                let status = *status_rx.borrow_and_update();
                emit(output, &format!("{}\n", render_status(status, color))).await?;
            }
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read input")? else {
                    break;
                };
                match composer.apply(parse_line(&line)) {
                    Outcome::Continue | Outcome::Sent => {}
                    Outcome::Redraw => {
                        emit(output, &render_form(composer.draft(), composer.status(), color)).await?;
                    }
                    Outcome::Help => emit(output, &format!("{HELP}\n")).await?,
                    Outcome::Quit => {
                        tracing::info!(target: "composer", "quit requested; pending sends are left behind");
                        return Ok(());
                    }
                }
            }
        }
    }

    tokio::select! {
        _ = composer.settle() => {}
        _ = listener.notified() => {
            tracing::info!(target: "composer", "shutdown requested while waiting on pending sends");
            return Ok(());
        }
    }
    if status_rx.has_changed().unwrap_or(false) {
        let status = *status_rx.borrow_and_update();
        emit(output, &format!("{}\n", render_status(status, color))).await?;
    }
    Ok(())
}

async fn emit<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}
