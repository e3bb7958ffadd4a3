pub mod cli;
pub mod commands;

use std::sync::Arc;

use anyhow::Context;
use marquee_client::app_config::Config;
use marquee_client::{ApiClient, AuthApi, CatalogApi, TicketsApi};
use marquee_core::operator::OperatorSession;

use crate::cli::{Cli, Command};

pub async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    let api = Arc::new(ApiClient::new(&config.api)?);
    let session = login(&config, &api).await?;

    match cli.command {
        Command::Movies { action } => {
            commands::catalog::movies(action, &CatalogApi::new(api.clone())).await
        }
        Command::Rooms { action } => {
            commands::catalog::rooms(action, &CatalogApi::new(api.clone())).await
        }
        Command::Shows { action } => {
            commands::catalog::shows(action, &CatalogApi::new(api.clone())).await
        }
        Command::Map { show_id } => commands::seatmap::show_map(show_id, api.clone()).await,
        Command::Sell {
            show_id,
            seats,
            tendered,
        } => {
            commands::sell::run(
                show_id,
                &seats,
                cli::to_cents(tendered),
                &config,
                &session,
                api.clone(),
            )
            .await
        }
        Command::Reprint { ticket_id } => {
            commands::tickets::reprint(ticket_id, &config, &TicketsApi::new(api.clone())).await
        }
        Command::CancelTicket { ticket_id } => {
            commands::tickets::cancel(ticket_id, &TicketsApi::new(api.clone())).await
        }
        Command::Report {
            from,
            to,
            movie,
            room,
            csv,
        } => {
            commands::report::run(from, to, movie, room, csv, &TicketsApi::new(api.clone())).await
        }
    }
}

async fn login(config: &Config, api: &Arc<ApiClient>) -> anyhow::Result<OperatorSession> {
    let username = config
        .auth
        .username
        .as_deref()
        .context("auth.username is not configured")?;
    let password = config
        .auth
        .password
        .as_deref()
        .context("auth.password is not configured (set MARQUEE__AUTH__PASSWORD)")?;
    let session = AuthApi::new(api.clone())
        .login(username, password)
        .await
        .context("login failed")?;
    Ok(session)
}
