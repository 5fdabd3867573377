//! Runnable roster deployment.
//!
//! Seeds one in-memory store per sport, serves the five backends on
//! ephemeral ports and the gateway on a fixed one, then drives a short
//! client session against the gateway and prints what the presenters
//! rendered. With `--serve` the processes stay up afterwards so the
//! gateway can be poked by hand.

mod seed;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use rosterhub::client::{
    all_sports, list_names_across, ActionHistory, Article, FormPresenter, GatewayClient,
    InfoPresenter, ListPresenter, SportModule,
};
use rosterhub::service::{About, SportConfig};
use rosterhub::store::MemoryStore;
use rosterhub::{gateway, service, RouteEntry, RouteTable};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "roster-example", about = "Seeded roster deployment and demo session")]
struct Args {
    /// Port for the API gateway.
    #[arg(long, default_value_t = 8001)]
    gateway_port: u16,

    /// Keep serving after the demo session instead of exiting.
    #[arg(long)]
    serve: bool,
}

fn seed_for(module: &SportModule) -> Vec<Value> {
    match module.name.as_str() {
        "natacion" => seed::swimmers(),
        "waterpolo" => seed::water_polo_players(),
        "remo" => seed::rowers(),
        "beisbol" => seed::baseball_players(),
        "futbol" => seed::football_players(),
        _ => Vec::new(),
    }
}

fn config_for(module: &SportModule) -> SportConfig {
    SportConfig {
        name: module.name.clone(),
        display_name: format!("MS {}", module.display_name),
        id_field: module.id_field.clone(),
        about: About {
            message: format!("MS {}: about", module.display_name),
            author: "Rosterhub maintainers".to_string(),
            email: "roster@example.org".to_string(),
            date: "07/08/2026".to_string(),
        },
    }
}

async fn spawn_backend(module: &SportModule, id_base: u64) -> Result<String> {
    let store = Arc::new(MemoryStore::seeded(id_base, seed_for(module)).await);
    let app = service::router(config_for(module), store);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = service::serve(listener, app).await {
            tracing::error!(error = %e, "backend stopped");
        }
    });
    Ok(format!("http://{}", addr))
}

async fn demo_session(client: &GatewayClient, sports: &[SportModule]) -> Result<()> {
    let mut article = Article::new();
    let mut history = ActionHistory::new();

    let swimming = &sports[0];
    let info = InfoPresenter::new(swimming, client);
    info.process_home(&mut article, &mut history).await?;
    println!("== {}\n{}\n", article.title(), article.content());

    let lists = ListPresenter::new(swimming, client);
    lists.list_roster(&mut article, &mut history).await?;
    println!("== {}\n{}\n", article.title(), article.content());

    lists
        .list_roster_sorted_by("nombre", &mut article, &mut history)
        .await?;
    println!("== {} (by nombre)\n{}\n", article.title(), article.content());

    list_names_across(sports, client, true, &mut article, &mut history).await?;
    println!("== {}\n{}\n", article.title(), article.content());

    // Edit the first swimmer's name and save it back.
    let documents = client.fetch_all(&swimming.prefix).await?;
    if let Some(first) = documents.first() {
        let mut form = FormPresenter::new(swimming, client);
        form.show(&first.ref_id, &mut article, &mut history).await?;
        form.edit()?;
        form.set_value("nombre", "Mireia (cap.)")?;
        form.save(&mut article, &mut history).await?;
        println!("== {}\n{}\n", article.title(), article.content());
    }

    println!("== Action history");
    for action in history.newest_first() {
        println!("  - {}", action);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    let sports = all_sports();

    let mut entries = Vec::new();
    for (i, module) in sports.iter().enumerate() {
        let target = spawn_backend(module, (i as u64 + 1) * 1000).await?;
        tracing::info!(sport = %module.name, %target, "backend up");
        entries.push(RouteEntry {
            prefix: module.prefix.clone(),
            target,
        });
    }

    let table = RouteTable::new(entries)?;
    let listener =
        tokio::net::TcpListener::bind(("127.0.0.1", args.gateway_port)).await?;
    let gateway_url = format!("http://{}", listener.local_addr()?);
    tokio::spawn(async move {
        if let Err(e) = gateway::serve(listener, gateway::router(table)).await {
            tracing::error!(error = %e, "gateway stopped");
        }
    });
    tracing::info!(%gateway_url, "gateway up");

    let client = GatewayClient::new(gateway_url);
    demo_session(&client, &sports).await?;

    if args.serve {
        tracing::info!("serving until Ctrl-C");
        tokio::signal::ctrl_c().await?;
    }
    Ok(())
}
