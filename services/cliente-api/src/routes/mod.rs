use axum::{routing::get, Router};

use crate::{handlers::*, AppState};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .nest("/clientes", clientes_routes())
}

fn clientes_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(listar_clientes).post(criar_cliente))
        .route(
            "/:id",
            get(buscar_cliente_por_id)
                .put(atualizar_cliente)
                .delete(deletar_cliente),
        )
}
