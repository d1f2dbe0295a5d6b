//src/main.rs

use tokio::net::TcpListener;

use pos_backend::config::AppState;

#[tokio::main]
async fn main() {
    // Inicializa o logger.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização (bootstrap das tabelas;
    // num pos.db existente é no-op).
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Reconciliação de categorias: roda uma única vez e precisa terminar
    // (com os commits visíveis) antes do listener subir.
    let report = app_state
        .reconciliation_job()
        .run(&app_state.db_pool)
        .await
        .expect("Falha na reconciliação de categorias.");
    if report.is_noop() {
        tracing::info!("Registro de categorias já estava consistente");
    }

    let addr = app_state.bind_addr.clone();
    let app = pos_backend::app(app_state);

    // Inicia o servidor
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
