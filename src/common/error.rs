use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// As mensagens voltadas ao cliente ficam em inglês: são o contrato
// observado pelo frontend existente ("Product not found" etc.).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Product not found")]
    ProductNotFound,

    #[error("Sale not found")]
    SaleNotFound,

    #[error("Category not found")]
    CategoryNotFound,

    #[error("Brand not found")]
    BrandNotFound,

    #[error("Category name already exists: {0}")]
    CategoryNameAlreadyExists(String),

    #[error("Brand name already exists: {0}")]
    BrandNameAlreadyExists(String),

    #[error("Not enough stock")]
    InsufficientStock,

    // Variante para erros de banco de dados (sqlx)
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado.
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    /// Identificador estável, legível por máquina, para cada família de erro.
    fn kind(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "validation_error",
            AppError::ProductNotFound
            | AppError::SaleNotFound
            | AppError::CategoryNotFound
            | AppError::BrandNotFound => "not_found",
            AppError::CategoryNameAlreadyExists(_) | AppError::BrandNameAlreadyExists(_) => {
                "conflict"
            }
            AppError::InsufficientStock => "insufficient_stock",
            AppError::DatabaseError(_) | AppError::InternalServerError(_) => "internal",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();

        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "kind": kind,
                    "error": "One or more fields are invalid.",
                    "details": details,
                }));
                return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
            }

            AppError::ProductNotFound => (StatusCode::NOT_FOUND, "Product not found".to_string()),
            AppError::SaleNotFound => (StatusCode::NOT_FOUND, "Sale not found".to_string()),
            AppError::CategoryNotFound => {
                (StatusCode::NOT_FOUND, "Category not found".to_string())
            }
            AppError::BrandNotFound => (StatusCode::NOT_FOUND, "Brand not found".to_string()),

            AppError::CategoryNameAlreadyExists(name) => (
                StatusCode::BAD_REQUEST,
                format!("Category '{name}' already exists"),
            ),
            AppError::BrandNameAlreadyExists(name) => (
                StatusCode::BAD_REQUEST,
                format!("Brand '{name}' already exists"),
            ),

            AppError::InsufficientStock => {
                (StatusCode::BAD_REQUEST, "Not enough stock".to_string())
            }

            // DatabaseError e InternalServerError viram 500.
            // O detalhe fica no log do servidor; o cliente recebe só o genérico
            // (nunca o texto interno nem stack trace).
            ref e => {
                tracing::error!("Erro interno do servidor: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "kind": kind, "error": error_message }));
        (status, body).into_response()
    }
}
