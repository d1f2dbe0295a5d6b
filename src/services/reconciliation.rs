// src/services/reconciliation.rs

use std::collections::HashMap;

use sqlx::{SqliteConnection, SqlitePool};

use crate::{
    common::error::AppError,
    db::{CategoryRepository, ProductRepository},
    models::Category,
};

// Categorias semeadas em toda loja nova (nome canônico + rótulo tailandês).
const DEFAULT_CATEGORIES: [(&str, &str); 4] = [
    ("Tv", "โทรทัศน์"),
    ("Fan", "พัดลม"),
    ("Refrigerator", "ตู้เย็น"),
    ("Washing Machine", "เครื่องซักผ้า"),
];

/// Contadores do que a rodada fez. Numa base já reconciliada, todos zeram
/// (é assim que os testes provam a idempotência).
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReconciliationReport {
    /// Linhas duplicadas (case-variant) removidas do registro.
    pub merged_duplicates: u64,
    /// Categorias padrão inseridas.
    pub seeded: u64,
    /// Nomes do registro normalizados para o casing canônico.
    pub normalized: u64,
    /// Categorias criadas a partir de rótulos de produto sem registro.
    pub backfilled: u64,
    /// Produtos que tiveram o rótulo reescrito em alguma cascata.
    pub relabeled_products: u64,
}

impl ReconciliationReport {
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }
}

/// Rotina de startup: roda uma única vez, ANTES do serviço aceitar tráfego.
/// Não foi desenhada para rodar ao lado de requisições — ou completa, ou o
/// processo não sobe.
pub struct ReconciliationJob {
    category_repo: CategoryRepository,
    product_repo: ProductRepository,
}

impl ReconciliationJob {
    pub fn new(category_repo: CategoryRepository, product_repo: ProductRepository) -> Self {
        Self { category_repo, product_repo }
    }

    /// Ordem fixa: migração de esquema legado → (merge + seed, 1º commit)
    /// → back-fill (2º commit). O seed precisa estar visível antes do
    /// back-fill reler o registro, daí os dois commits sequenciais.
    pub async fn run(&self, pool: &SqlitePool) -> Result<ReconciliationReport, AppError> {
        self.migrate_legacy_schema(pool).await?;

        let mut report = ReconciliationReport::default();

        let mut tx = pool.begin().await?;
        self.merge_case_duplicates(&mut tx, &mut report).await?;
        self.seed_defaults(&mut tx, &mut report).await?;
        tx.commit().await?;

        let mut tx = pool.begin().await?;
        self.backfill_from_products(&mut tx, &mut report).await?;
        tx.commit().await?;

        tracing::info!(?report, "reconciliação de categorias concluída");
        Ok(report)
    }

    /// Passo 1: renomeia a coluna legada `name_th` → `thai`, se ainda
    /// existir. No-op idempotente assim que o esquema alvo está no lugar.
    async fn migrate_legacy_schema(&self, pool: &SqlitePool) -> Result<(), AppError> {
        let columns: Vec<String> =
            sqlx::query_scalar("SELECT name FROM pragma_table_info('category')")
                .fetch_all(pool)
                .await?;

        let has_legacy = columns.iter().any(|c| c == "name_th");
        let has_target = columns.iter().any(|c| c == "thai");

        if has_legacy && !has_target {
            sqlx::query("ALTER TABLE category RENAME COLUMN name_th TO thai")
                .execute(pool)
                .await?;
            tracing::info!("esquema legado migrado: category.name_th -> category.thai");
        }
        Ok(())
    }

    /// Mescla duplicatas case-variant do registro: a de menor id é a
    /// canônica, as demais são removidas depois de cascatear os produtos.
    async fn merge_case_duplicates(
        &self,
        conn: &mut SqliteConnection,
        report: &mut ReconciliationReport,
    ) -> Result<(), AppError> {
        let categories = self.category_repo.get_all(&mut *conn).await?;

        // get_all vem ordenado por id, então o primeiro de cada grupo é o canônico.
        let mut canonical: HashMap<String, Category> = HashMap::new();
        for category in categories {
            let key = category.name.to_lowercase();
            if let Some(canon) = canonical.get(&key) {
                if category.name != canon.name {
                    report.relabeled_products += self
                        .product_repo
                        .rename_category_label(&mut *conn, &category.name, &canon.name)
                        .await?;
                }
                self.category_repo.delete(&mut *conn, category.id).await?;
                report.merged_duplicates += 1;
            } else {
                canonical.insert(key, category);
            }
        }
        Ok(())
    }

    /// Passo 2: garante as categorias padrão. Match case-insensitive com
    /// casing divergente é normalizado para o canônico, com cascata.
    async fn seed_defaults(
        &self,
        conn: &mut SqliteConnection,
        report: &mut ReconciliationReport,
    ) -> Result<(), AppError> {
        for (name, thai) in DEFAULT_CATEGORIES {
            match self.category_repo.find_by_name_ci(&mut *conn, name).await? {
                None => {
                    self.category_repo.insert(&mut *conn, name, Some(thai), None).await?;
                    report.seeded += 1;
                }
                Some(existing) if existing.name != name => {
                    report.relabeled_products += self
                        .product_repo
                        .rename_category_label(&mut *conn, &existing.name, name)
                        .await?;
                    let normalized = Category { name: name.to_string(), ..existing };
                    self.category_repo.update_full(&mut *conn, &normalized).await?;
                    report.normalized += 1;
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Passo 3: back-fill. Todo rótulo de produto sem match no registro
    /// vira uma categoria nova (rótulo como nome em inglês E tailandês);
    /// rótulo com match em casing diferente é reescrito nos produtos para
    /// o casing canônico do registro.
    async fn backfill_from_products(
        &self,
        conn: &mut SqliteConnection,
        report: &mut ReconciliationReport,
    ) -> Result<(), AppError> {
        let labels = self.product_repo.distinct_categories(&mut *conn).await?;

        for label in labels {
            match self.category_repo.find_by_name_ci(&mut *conn, &label).await? {
                None => {
                    self.category_repo
                        .insert(&mut *conn, &label, Some(&label), None)
                        .await?;
                    report.backfilled += 1;
                }
                Some(existing) if existing.name != label => {
                    report.relabeled_products += self
                        .product_repo
                        .rename_category_label(&mut *conn, &label, &existing.name)
                        .await?;
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}
