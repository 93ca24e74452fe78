//! Customer Repository
//!
//! CRUD operations for customer records.
//! Uses runtime SQL queries (unchecked) to avoid requiring DATABASE_URL at compile time.

use anyhow::{Context, Result};
use sqlx::PgPool;

use cadastro_models::{Cliente, ClienteCreate};

#[derive(Clone)]
pub struct ClienteRepository {
    pool: PgPool,
}

impl ClienteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find customer by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Cliente>> {
        let cliente: Option<Cliente> = sqlx::query_as(
            r#"
            SELECT id, cpf, nome, email, telefone, agencia, conta,
                   tipo_conta, cartao_debito, cartao_credito, bandeira_cartao_credito
            FROM clientes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch cliente by ID")?;

        Ok(cliente)
    }

    /// Find all customers, in insertion order
    pub async fn find_all(&self) -> Result<Vec<Cliente>> {
        let clientes: Vec<Cliente> = sqlx::query_as(
            r#"
            SELECT id, cpf, nome, email, telefone, agencia, conta,
                   tipo_conta, cartao_debito, cartao_credito, bandeira_cartao_credito
            FROM clientes
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch all clientes")?;

        Ok(clientes)
    }

    /// Find customers whose name contains the given term, case-insensitively
    pub async fn find_by_nome(&self, nome: &str) -> Result<Vec<Cliente>> {
        let clientes: Vec<Cliente> = sqlx::query_as(
            r#"
            SELECT id, cpf, nome, email, telefone, agencia, conta,
                   tipo_conta, cartao_debito, cartao_credito, bandeira_cartao_credito
            FROM clientes
            WHERE nome ILIKE '%' || $1 || '%'
            ORDER BY id
            "#,
        )
        .bind(nome)
        .fetch_all(&self.pool)
        .await
        .context("Failed to search clientes by name")?;

        Ok(clientes)
    }

    /// Find any customer holding the given CPF or email, for the pre-insert
    /// uniqueness check
    pub async fn find_by_cpf_or_email(&self, cpf: &str, email: &str) -> Result<Option<Cliente>> {
        let cliente: Option<Cliente> = sqlx::query_as(
            r#"
            SELECT id, cpf, nome, email, telefone, agencia, conta,
                   tipo_conta, cartao_debito, cartao_credito, bandeira_cartao_credito
            FROM clientes
            WHERE cpf = $1 OR email = $2
            LIMIT 1
            "#,
        )
        .bind(cpf)
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to check cliente uniqueness")?;

        Ok(cliente)
    }

    /// Find a customer other than `exclude_id` holding the given email
    pub async fn find_other_with_email(
        &self,
        email: &str,
        exclude_id: i64,
    ) -> Result<Option<Cliente>> {
        let cliente: Option<Cliente> = sqlx::query_as(
            r#"
            SELECT id, cpf, nome, email, telefone, agencia, conta,
                   tipo_conta, cartao_debito, cartao_credito, bandeira_cartao_credito
            FROM clientes
            WHERE email = $1 AND id <> $2
            LIMIT 1
            "#,
        )
        .bind(email)
        .bind(exclude_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to check email uniqueness")?;

        Ok(cliente)
    }

    /// Find a customer other than `exclude_id` holding the given CPF
    pub async fn find_other_with_cpf(
        &self,
        cpf: &str,
        exclude_id: i64,
    ) -> Result<Option<Cliente>> {
        let cliente: Option<Cliente> = sqlx::query_as(
            r#"
            SELECT id, cpf, nome, email, telefone, agencia, conta,
                   tipo_conta, cartao_debito, cartao_credito, bandeira_cartao_credito
            FROM clientes
            WHERE cpf = $1 AND id <> $2
            LIMIT 1
            "#,
        )
        .bind(cpf)
        .bind(exclude_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to check CPF uniqueness")?;

        Ok(cliente)
    }

    /// Create a new customer, returning the row with its generated id
    pub async fn create(&self, cliente: &ClienteCreate) -> Result<Cliente> {
        let created: Cliente = sqlx::query_as(
            r#"
            INSERT INTO clientes
                (cpf, nome, email, telefone, agencia, conta,
                 tipo_conta, cartao_debito, cartao_credito, bandeira_cartao_credito)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, cpf, nome, email, telefone, agencia, conta,
                      tipo_conta, cartao_debito, cartao_credito, bandeira_cartao_credito
            "#,
        )
        .bind(&cliente.cpf)
        .bind(&cliente.nome)
        .bind(&cliente.email)
        .bind(&cliente.telefone)
        .bind(&cliente.agencia)
        .bind(&cliente.conta)
        .bind(&cliente.tipo_conta)
        .bind(&cliente.cartao_debito)
        .bind(&cliente.cartao_credito)
        .bind(&cliente.bandeira_cartao_credito)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create cliente")?;

        Ok(created)
    }

    /// Persist the full merged row. A single statement, so a failure leaves
    /// the stored row untouched.
    pub async fn update(&self, cliente: &Cliente) -> Result<Cliente> {
        let updated: Cliente = sqlx::query_as(
            r#"
            UPDATE clientes
            SET cpf = $2, nome = $3, email = $4, telefone = $5, agencia = $6,
                conta = $7, tipo_conta = $8, cartao_debito = $9,
                cartao_credito = $10, bandeira_cartao_credito = $11
            WHERE id = $1
            RETURNING id, cpf, nome, email, telefone, agencia, conta,
                      tipo_conta, cartao_debito, cartao_credito, bandeira_cartao_credito
            "#,
        )
        .bind(cliente.id)
        .bind(&cliente.cpf)
        .bind(&cliente.nome)
        .bind(&cliente.email)
        .bind(&cliente.telefone)
        .bind(&cliente.agencia)
        .bind(&cliente.conta)
        .bind(&cliente.tipo_conta)
        .bind(&cliente.cartao_debito)
        .bind(&cliente.cartao_credito)
        .bind(&cliente.bandeira_cartao_credito)
        .fetch_one(&self.pool)
        .await
        .context("Failed to update cliente")?;

        Ok(updated)
    }

    /// Delete customer by ID, returning how many rows were removed
    pub async fn delete(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM clientes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete cliente")?;

        Ok(result.rows_affected())
    }
}
