// file: src/testcase/generator.rs
// description: seeded random generation of sum testcase suites
// reference: https://docs.rs/rand

use crate::config::TestcaseConfig;
use crate::error::Result;
use crate::models::Sequence;
use crate::pipeline::sum_all;
use crate::testcase::format::{render_cases, render_expected};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

#[derive(Debug, Clone)]
pub struct GeneratedSuite {
    pub cases: Vec<Sequence>,
    pub expected: Vec<i64>,
}

impl GeneratedSuite {
    pub fn render_input(&self, separator: &str) -> String {
        render_cases(&self.cases, separator)
    }

    pub fn render_expected(&self, separator: &str) -> String {
        render_expected(&self.expected, separator)
    }
}

pub struct TestcaseGenerator {
    config: TestcaseConfig,
    rng: StdRng,
}

impl TestcaseGenerator {
    pub fn new(config: TestcaseConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(config: TestcaseConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn generate(&mut self) -> Result<GeneratedSuite> {
        self.config.validate()?;

        let TestcaseConfig {
            count,
            min_len,
            max_len,
            min_value,
            max_value,
            ..
        } = self.config;

        let mut cases = Vec::with_capacity(count);
        let mut expected = Vec::with_capacity(count);

        for _ in 0..count {
            let len = self.rng.gen_range(min_len..=max_len);
            let case: Sequence = (0..len)
                .map(|_| self.rng.gen_range(min_value..=max_value))
                .collect();

            expected.push(sum_all(&case)?);
            cases.push(case);
        }

        info!(
            "Generated {} cases (length {}..={}, values {}..={})",
            count, min_len, max_len, min_value, max_value
        );

        Ok(GeneratedSuite { cases, expected })
    }
}
