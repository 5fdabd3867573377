//! The whole system over real sockets: stores, backends, gateway, client.

use std::sync::Arc;

use rosterhub::client::{
    list_names_across, ActionHistory, Article, FormPresenter, FormState, GatewayClient,
    InfoPresenter, ListPresenter, SportModule,
};
use rosterhub::gateway;
use rosterhub::service::{self, About, SportConfig};
use rosterhub::store::MemoryStore;
use rosterhub::{RouteEntry, RouteTable};
use serde_json::json;

fn config_for(module: &SportModule) -> SportConfig {
    SportConfig {
        name: module.name.clone(),
        display_name: format!("MS {}", module.display_name),
        id_field: module.id_field.clone(),
        about: About {
            message: format!("MS {}: about", module.display_name),
            author: "Ana Torres".to_string(),
            email: "ana@example.org".to_string(),
            date: "22/03/2023".to_string(),
        },
    }
}

async fn spawn_service(module: &SportModule, store: Arc<MemoryStore>) -> String {
    let app = service::router(config_for(module), store);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        service::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn spawn_gateway(table: RouteTable) -> String {
    let app = gateway::router(table);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        gateway::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn swimmer(nombre: &str, apellidos: &str) -> serde_json::Value {
    json!({
        "nombre": nombre,
        "apellidos": apellidos,
        "fecha_nacimiento": {"dia": 3, "mes": 5, "año": 1998},
        "nacionalidad": "España",
        "años_de_participacion_mundial": 4,
        "numero_de_participaciones_juegos_olimpicos": 2,
    })
}

/// Brings up swimming and water polo backends behind a gateway.
async fn deploy_two_sports() -> (GatewayClient, SportModule, SportModule) {
    let swimming = rosterhub::client::swimming();
    let water_polo = rosterhub::client::water_polo();

    let swim_store = Arc::new(
        MemoryStore::seeded(1, vec![swimmer("Bea", "Ruiz"), swimmer("Ana", "Torres")]).await,
    );
    let polo_store = Arc::new(
        MemoryStore::seeded(
            100,
            vec![json!({
                "nombre": "Carla",
                "apellidos": "Gil",
                "fec_nac": {"dia": 7, "mes": 7, "anio": 1995},
                "competiciones": 12,
                "nacionalidad": "Italia",
                "peso": 70,
                "posicion": "Boya",
            })],
        )
        .await,
    );

    let swim_url = spawn_service(&swimming, swim_store).await;
    let polo_url = spawn_service(&water_polo, polo_store).await;

    let table = RouteTable::new(vec![
        RouteEntry {
            prefix: swimming.prefix.clone(),
            target: swim_url,
        },
        RouteEntry {
            prefix: water_polo.prefix.clone(),
            target: polo_url,
        },
    ])
    .unwrap();
    let gateway_url = spawn_gateway(table).await;

    (GatewayClient::new(gateway_url), swimming, water_polo)
}

#[tokio::test]
async fn test_listings_through_the_gateway() {
    let (client, swimming, _) = deploy_two_sports().await;
    let presenter = ListPresenter::new(&swimming, &client);
    let mut article = Article::new();
    let mut history = ActionHistory::new();

    presenter
        .list_names(&mut article, &mut history)
        .await
        .unwrap();
    assert_eq!(article.content().matches("<tr>").count(), 2);
    assert!(article.content().find("Bea").unwrap() < article.content().find("Ana").unwrap());

    presenter
        .list_names_sorted(&mut article, &mut history)
        .await
        .unwrap();
    assert!(article.content().find("Ana").unwrap() < article.content().find("Bea").unwrap());

    presenter
        .list_roster_sorted_by("nombre", &mut article, &mut history)
        .await
        .unwrap();
    assert!(article.content().contains("<td>Torres</td>"));
    assert_eq!(history.len(), 3);
}

#[tokio::test]
async fn test_cross_sport_names_listing() {
    let (client, swimming, water_polo) = deploy_two_sports().await;
    let modules = vec![swimming, water_polo];
    let mut article = Article::new();
    let mut history = ActionHistory::new();

    list_names_across(&modules, &client, true, &mut article, &mut history)
        .await
        .unwrap();
    let content = article.content();
    assert_eq!(content.matches("<tr>").count(), 3);
    // Alphabetical across both sports: Ana, Bea, Carla.
    let ana = content.find("Ana").unwrap();
    let bea = content.find("Bea").unwrap();
    let carla = content.find("Carla").unwrap();
    assert!(ana < bea && bea < carla);
}

#[tokio::test]
async fn test_edit_save_round_trip() {
    let (client, swimming, _) = deploy_two_sports().await;
    let mut form = FormPresenter::new(&swimming, &client);
    let mut article = Article::new();
    let mut history = ActionHistory::new();

    form.show("2", &mut article, &mut history).await.unwrap();
    assert_eq!(form.value("nombre"), Some("Ana"));

    form.edit().unwrap();
    form.set_value("nombre", "Ana María").unwrap();
    form.save(&mut article, &mut history).await.unwrap();

    // The save went through and the re-fetch re-rendered the new value.
    assert_eq!(form.state(), FormState::Viewing);
    assert_eq!(form.value("nombre"), Some("Ana María"));
    assert!(article.content().contains("Ana María"));

    // The store now holds the replaced data object, date as the form
    // string it displayed.
    let doc = client.fetch_one("/natacion", "2").await.unwrap();
    assert_eq!(doc.data["nombre"], "Ana María");
    assert_eq!(doc.data["fecha_nacimiento"], "3/5/1998");
}

#[tokio::test]
async fn test_home_and_about_presenters() {
    let (client, swimming, _) = deploy_two_sports().await;
    let presenter = InfoPresenter::new(&swimming, &client);
    let mut article = Article::new();
    let mut history = ActionHistory::new();

    presenter
        .process_home(&mut article, &mut history)
        .await
        .unwrap();
    assert_eq!(article.content(), "MS Swimming: home");

    presenter
        .process_about(&mut article, &mut history)
        .await
        .unwrap();
    assert!(article.content().contains("Ana Torres"));
    assert!(article.content().contains("ana@example.org"));
}

#[tokio::test]
async fn test_unrouted_sport_fails_with_gateway_error() {
    let (client, _, _) = deploy_two_sports().await;
    // Rowing is not in the route table; the gateway answers 404 with an
    // error payload, which fails envelope parsing downstream.
    let result = client.fetch_all("/remo").await;
    assert!(result.is_err());
}
