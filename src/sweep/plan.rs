use crate::{Dataset, SurvivalModel};

/// One call of the tuning program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation {
    pub model: SurvivalModel,
    pub dataset: Dataset,
}

impl Invocation {
    pub fn new(model: SurvivalModel, dataset: Dataset) -> Self {
        Self { model, dataset }
    }

    pub fn args(&self) -> [&'static str; 4] {
        ["--dataset", self.dataset.as_str(), "--model", self.model.as_str()]
    }
}

/// Cross product of `models` and `datasets`, models outer and datasets inner,
/// each in the order given.
pub fn sweep_plan(models: &[SurvivalModel], datasets: &[Dataset]) -> Vec<Invocation> {
    let mut plan = Vec::with_capacity(models.len() * datasets.len());
    for &model in models {
        for &dataset in datasets {
            plan.push(Invocation::new(model, dataset));
        }
    }
    plan
}
