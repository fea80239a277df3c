//! Linear models used for intent classification.
//!
//! [`LinearSvc`] is an L2-regularized, squared-hinge-loss support vector
//! classifier. Binary problems fit one model; problems with more classes fit
//! one model per class (one-vs-rest). Each binary model is solved with dual
//! coordinate descent, visiting samples in an order drawn from a seeded RNG,
//! so two fits on the same data with the same seed produce identical weights.

use std::collections::BTreeSet;

use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::{ParleyError, Result};

/// Projected gradients smaller than this are treated as zero.
const GRADIENT_EPSILON: f64 = 1.0e-12;

/// Hyper-parameters for [`LinearSvc`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Inverse regularization strength.
    pub c: f64,
    /// Stopping tolerance on the projected gradient gap.
    pub tolerance: f64,
    /// Maximum number of passes over the data per binary model.
    pub max_iter: usize,
    /// Value of the synthetic feature used to learn the intercept.
    pub intercept_scaling: f64,
    /// Seed for the sample visiting order.
    pub seed: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            c: 1.0,
            tolerance: 1.0e-4,
            max_iter: 1000,
            intercept_scaling: 1.0,
            seed: 0,
        }
    }
}

impl ClassifierConfig {
    /// Reject values the solver cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !(self.c > 0.0) {
            return Err(ParleyError::invalid_argument(format!(
                "c must be positive, got {}",
                self.c
            )));
        }
        if !(self.tolerance > 0.0) {
            return Err(ParleyError::invalid_argument(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iter == 0 {
            return Err(ParleyError::invalid_argument(
                "max_iter must be at least 1",
            ));
        }
        if !(self.intercept_scaling > 0.0) {
            return Err(ParleyError::invalid_argument(format!(
                "intercept_scaling must be positive, got {}",
                self.intercept_scaling
            )));
        }
        Ok(())
    }
}

/// Weights and intercept of one binary separator.
#[derive(Debug, Clone)]
struct BinaryModel {
    weights: Vec<f64>,
    intercept: f64,
}

impl BinaryModel {
    fn decision(&self, features: &[f64]) -> f64 {
        dot(&self.weights, features) + self.intercept
    }
}

/// Linear support vector classifier over dense feature vectors.
#[derive(Debug, Clone)]
pub struct LinearSvc {
    config: ClassifierConfig,
    /// Class labels in sorted order.
    classes: Vec<String>,
    /// One model for binary problems, otherwise one per class.
    models: Vec<BinaryModel>,
    n_features: usize,
}

impl LinearSvc {
    /// Create an untrained classifier.
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            classes: Vec::new(),
            models: Vec::new(),
            n_features: 0,
        })
    }

    /// Fit the classifier on feature rows and their labels.
    pub fn fit(&mut self, features: &[Vec<f64>], labels: &[String]) -> Result<()> {
        if features.len() != labels.len() {
            return Err(ParleyError::training(format!(
                "{} feature rows but {} labels",
                features.len(),
                labels.len()
            )));
        }

        let classes: Vec<String> = labels
            .iter()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        if classes.len() < 2 {
            return Err(ParleyError::InsufficientTrainingData {
                min_classes: 2,
                actual: classes.len(),
            });
        }

        let n_features = features[0].len();
        if features.iter().any(|row| row.len() != n_features) {
            return Err(ParleyError::training("feature rows differ in length"));
        }

        // Rows extended with the constant intercept feature.
        let augmented: Vec<Vec<f64>> = features
            .iter()
            .map(|row| {
                let mut extended = row.clone();
                extended.push(self.config.intercept_scaling);
                extended
            })
            .collect();

        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let positives: Vec<&String> = if classes.len() == 2 {
            vec![&classes[1]]
        } else {
            classes.iter().collect()
        };

        let mut models = Vec::with_capacity(positives.len());
        for positive in positives {
            let targets: Vec<f64> = labels
                .iter()
                .map(|label| if label == positive { 1.0 } else { -1.0 })
                .collect();
            let (mut weights, iterations) =
                self.solve_dual(&augmented, &targets, &mut rng);

            if iterations >= self.config.max_iter {
                warn!(
                    "Solver reached max_iter={} for class '{}' before converging",
                    self.config.max_iter, positive
                );
            } else {
                debug!("Class '{positive}' converged after {iterations} iterations");
            }

            let intercept = weights.pop().unwrap_or(0.0) * self.config.intercept_scaling;
            models.push(BinaryModel { weights, intercept });
        }

        self.classes = classes;
        self.models = models;
        self.n_features = n_features;

        Ok(())
    }

    /// Dual coordinate descent for the squared-hinge-loss SVM.
    ///
    /// Returns the primal weights (intercept feature last) and the number of
    /// passes performed.
    fn solve_dual(&self, rows: &[Vec<f64>], targets: &[f64], rng: &mut StdRng) -> (Vec<f64>, usize) {
        let n_samples = rows.len();
        let dimension = rows.first().map_or(0, Vec::len);
        let diag = 0.5 / self.config.c;

        let q_diag: Vec<f64> = rows.iter().map(|row| dot(row, row) + diag).collect();
        let mut alpha = vec![0.0; n_samples];
        let mut weights = vec![0.0; dimension];
        let mut order: Vec<usize> = (0..n_samples).collect();

        let mut iterations = 0;
        while iterations < self.config.max_iter {
            order.shuffle(rng);

            let mut pg_max = f64::NEG_INFINITY;
            let mut pg_min = f64::INFINITY;

            for &i in &order {
                let gradient = targets[i] * dot(&weights, &rows[i]) - 1.0 + diag * alpha[i];
                let projected = if alpha[i] == 0.0 {
                    gradient.min(0.0)
                } else {
                    gradient
                };

                pg_max = pg_max.max(projected);
                pg_min = pg_min.min(projected);

                if projected.abs() > GRADIENT_EPSILON {
                    let previous = alpha[i];
                    alpha[i] = (alpha[i] - gradient / q_diag[i]).max(0.0);
                    let step = (alpha[i] - previous) * targets[i];
                    for (w, x) in weights.iter_mut().zip(&rows[i]) {
                        *w += step * x;
                    }
                }
            }

            iterations += 1;
            if pg_max - pg_min <= self.config.tolerance {
                break;
            }
        }

        (weights, iterations)
    }

    /// Decision scores, one per binary model.
    ///
    /// For a binary problem there is a single score; positive means the
    /// second class.
    pub fn decision_function(&self, features: &[f64]) -> Result<Vec<f64>> {
        if !self.is_trained() {
            return Err(ParleyError::training("model is not trained"));
        }
        if features.len() != self.n_features {
            return Err(ParleyError::training(format!(
                "expected {} features, got {}",
                self.n_features,
                features.len()
            )));
        }

        Ok(self
            .models
            .iter()
            .map(|model| model.decision(features))
            .collect())
    }

    /// Predict the label with the highest score, together with that score.
    ///
    /// Ties go to the class that sorts first.
    pub fn predict_with_score(&self, features: &[f64]) -> Result<(&str, f64)> {
        let scores = self.decision_function(features)?;

        if self.classes.len() == 2 {
            let score = scores[0];
            let label = if score > 0.0 {
                self.classes[1].as_str()
            } else {
                self.classes[0].as_str()
            };
            return Ok((label, score));
        }

        let mut best = 0;
        for (idx, score) in scores.iter().enumerate() {
            if *score > scores[best] {
                best = idx;
            }
        }
        Ok((self.classes[best].as_str(), scores[best]))
    }

    /// Predict the label with the highest score.
    pub fn predict(&self, features: &[f64]) -> Result<&str> {
        self.predict_with_score(features).map(|(label, _)| label)
    }

    /// Class labels in sorted order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Check if the model has been fitted.
    pub fn is_trained(&self) -> bool {
        !self.models.is_empty()
    }

    /// Get the configuration this model was built with.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
