use crate::error::MkResult;
use crate::model::filter::FilterSet;
use crate::model::frequency::{self, check_window_size};
use crate::model::types::{ModelSet, StatisticalModel, User, UserSet};
use rayon::prelude::*;
use tracing::{debug, info};

pub const DEFAULT_WINDOW_SIZES: [usize; 2] = [2, 3];

pub struct BuildOutcome {
    pub models: ModelSet,
    pub processed: usize,
    pub filtered_out: usize,
}

pub struct ModelBuilder {
    filters: FilterSet,
    window_sizes: Vec<usize>,
}

impl Default for ModelBuilder {
    fn default() -> Self {
        Self::new(FilterSet::default(), DEFAULT_WINDOW_SIZES.to_vec())
    }
}

impl ModelBuilder {
    pub fn new(filters: FilterSet, window_sizes: Vec<usize>) -> Self {
        Self {
            filters,
            window_sizes,
        }
    }

    pub fn window_sizes(&self) -> &[usize] {
        &self.window_sizes
    }

    /// Builds one model per user that passes the filters.
    ///
    /// Users are processed in parallel and merged afterwards. The first error
    /// aborts the whole build.
    pub fn build<'a, I>(&self, users: I) -> MkResult<BuildOutcome>
    where
        I: IntoParallelIterator<Item = &'a User>,
    {
        for &n in &self.window_sizes {
            check_window_size(n)?;
        }

        let results: Vec<Option<(String, StatisticalModel)>> = users
            .into_par_iter()
            .map(|user| -> MkResult<Option<(String, StatisticalModel)>> {
                if !self.filters.matches(user) {
                    debug!("Skipping user {} ({})", user.name, user.id);
                    return Ok(None);
                }
                let model = self.build_model(user)?;
                Ok(Some((user.id.clone(), model)))
            })
            .collect::<MkResult<Vec<_>>>()?;

        let considered = results.len();
        let models: ModelSet = results.into_iter().flatten().collect();
        let processed = models.len();
        let filtered_out = considered - processed;

        info!("Generated models for {} of {} users", processed, considered);
        info!("Filtered out {} users", filtered_out);

        Ok(BuildOutcome {
            models,
            processed,
            filtered_out,
        })
    }

    pub fn build_all(&self, users: &UserSet) -> MkResult<BuildOutcome> {
        info!("Generating models from {} users...", users.len());
        self.build(users.par_iter().map(|(_, user)| user))
    }

    pub fn build_model(&self, user: &User) -> MkResult<StatisticalModel> {
        let word_frequency = frequency::word_frequency(&user.messages);
        let ngrams = self
            .window_sizes
            .iter()
            .map(|&n| frequency::ngram(&user.messages, n))
            .collect::<MkResult<Vec<_>>>()?;

        Ok(StatisticalModel {
            name: user.name.clone(),
            word_frequency,
            ngrams,
        })
    }
}
