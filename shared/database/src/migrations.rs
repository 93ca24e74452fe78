use anyhow::Result;
use sqlx::PgPool;

pub async fn run_postgres_migrations(pool: &PgPool) -> Result<()> {
    tracing::info!("Running PostgreSQL migrations");

    // Create clientes table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS clientes (
            id BIGSERIAL PRIMARY KEY,
            cpf VARCHAR(14) NOT NULL UNIQUE,
            nome VARCHAR(100) NOT NULL,
            email VARCHAR(100) NOT NULL UNIQUE,
            telefone VARCHAR(15),
            agencia VARCHAR(10),
            conta VARCHAR(10),
            tipo_conta VARCHAR(19),
            cartao_debito VARCHAR(19),
            cartao_credito VARCHAR(20),
            bandeira_cartao_credito VARCHAR(20)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Index for the case-insensitive name search
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_clientes_nome ON clientes(nome)")
        .execute(pool)
        .await?;

    tracing::info!("PostgreSQL migrations completed successfully");
    Ok(())
}
