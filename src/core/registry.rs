use crate::core::solver::Solver;
use std::collections::HashMap;
use std::sync::Arc;

pub struct SolverRegistry {
    solvers: HashMap<String, Arc<dyn Solver>>,
}

impl SolverRegistry {
    pub fn new() -> Self {
        SolverRegistry {
            solvers: HashMap::new(),
        }
    }

    pub fn register(&mut self, solver: Arc<dyn Solver>) {
        self.solvers.insert(solver.name().to_string(), solver);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Solver>> {
        self.solvers.get(name).cloned()
    }

    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<_> = self.solvers.keys().cloned().collect();
        names.sort();
        names
    }
}
