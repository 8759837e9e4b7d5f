use crate::core::filters::FilterSet;
use crate::core::highlight::Highlighter;
use crate::core::summary::{summarize, WordRanking};
use crate::domain::model::{FilterParameters, FilterResult};
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;

pub struct FilterEngine<S: CatalogSource> {
    source: S,
    ranking: WordRanking,
}

impl<S: CatalogSource> FilterEngine<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            ranking: WordRanking::default(),
        }
    }

    pub fn with_word_ranking(mut self, ranking: WordRanking) -> Self {
        self.ranking = ranking;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetches the catalog, filters and highlights it, and summarizes the
    /// unfiltered catalog. Catalog errors are returned as-is.
    pub async fn filter_products(&self, params: &FilterParameters) -> Result<FilterResult> {
        let highlighter = Highlighter::new(params.highlight.as_deref())?;
        let filters = FilterSet::from_params(params);

        let catalog = self.source.fetch_all().await?;
        tracing::debug!("Fetched {} products from catalog", catalog.len());

        // 摘要必須在改寫描述之前以完整目錄計算
        let summary = summarize(&catalog, self.ranking);

        let mut products = filters.apply(catalog);
        tracing::debug!(
            "Applied filters {:?}, {} products matched",
            filters.names(),
            products.len()
        );

        if !highlighter.is_empty() {
            for product in &mut products {
                product.description = highlighter.highlight(&product.description);
            }
        }

        Ok(FilterResult { products, summary })
    }
}
