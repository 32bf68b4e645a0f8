//! Generational loop shared by RKGA and BRKGA.
//!
//! # Generation
//!
//! 1. Copy survivors (the BRKGA elite set) into the first slots.
//! 2. Fill the next `mutant_count` slots with random chromosomes.
//! 3. Fill the remaining slots with crossover offspring of two parents
//!    drawn by the [`ParentSelection`] strategy.
//! 4. Replace the population and let the strategy track it.
//!
//! Every new individual is decoded right away; infeasible genotypes get
//! `-inf` fitness. After the last generation the fittest individual is
//! decoded once more into the caller's problem.

use super::config::GeneticConfig;
use super::operators::{crossover, evaluate, evaluate_individual, generate_mutant};
use super::selection::{EliteParents, ParentSelection, UniformParents};
use crate::error::ConfigError;
use crate::genome::{Individual, Population};
use crate::metaheuristic::{average, debug_sanity_check, Metaheuristic};
use crate::problem::{Cost, Problem};
use crate::random::{ContinuousGenerator, DiscreteGenerator, DEFAULT_SEED};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, trace, warn};

/// Random-Key Genetic Algorithm: uniform parent selection.
pub type Rkga = GeneticAlgorithm<UniformParents>;

/// Biased Random-Key Genetic Algorithm: elite-biased parent selection.
pub type Brkga = GeneticAlgorithm<EliteParents>;

/// Timing counters and progress of the last run.
#[derive(Debug, Clone, Default)]
pub struct GeneticStats {
    /// Algorithm name ("RKGA" or "BRKGA").
    pub name: &'static str,

    /// Generations executed after the initial population.
    pub generations: usize,

    /// Best fitness of the initial population followed by the best
    /// fitness after every generation.
    pub best_history: Vec<f64>,

    /// Time to build and decode the initial population.
    pub initial_time: Duration,

    /// Time spent copying the elite set. `None` for strategies without
    /// survivors.
    pub elite_time: Option<Duration>,

    pub mutant_time: Duration,

    pub crossover_time: Duration,

    /// Time spent in generations, initial population excluded.
    pub total_time: Duration,
}

impl GeneticStats {
    fn for_selection<S: ParentSelection>(selection: &S) -> Self {
        Self {
            name: selection.name(),
            elite_time: selection.keeps_survivors().then(Duration::default),
            ..Self::default()
        }
    }
}

impl fmt::Display for GeneticStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.generations;
        let total = self.total_time.as_secs_f64();
        let mutant = self.mutant_time.as_secs_f64();
        let cross = self.crossover_time.as_secs_f64();
        writeln!(f, "{} algorithm performance:", self.name)?;
        writeln!(
            f,
            "    Initial population time:           {} s",
            self.initial_time.as_secs_f64()
        )?;
        writeln!(f, "    Total generation time:             {total} s")?;
        writeln!(f, "    Average generation time:           {} s", average(total, n))?;
        if let Some(elite) = self.elite_time.map(|t| t.as_secs_f64()) {
            writeln!(f, "    Total copying elite time:          {elite} s")?;
            writeln!(f, "    Average copying elite time:        {} s", average(elite, n))?;
        }
        writeln!(f, "    Total mutant generation time:      {mutant} s")?;
        writeln!(f, "    Average mutant generation time:    {} s", average(mutant, n))?;
        writeln!(f, "    Total crossover generation time:   {cross} s")?;
        write!(f, "    Average crossover generation time: {} s", average(cross, n))
    }
}

/// Random-key genetic algorithm parameterized by a parent-selection strategy.
///
/// # Usage
///
/// ```ignore
/// let config = GeneticConfig::new(problem.len())
///     .with_population_size(100)
///     .with_mutant_count(15)
///     .with_generations(200);
/// let mut brkga = Brkga::brkga(config, 20);
/// let cost = brkga.run(&mut problem)?;
/// ```
#[derive(Debug, Clone)]
pub struct GeneticAlgorithm<S: ParentSelection> {
    config: GeneticConfig,
    selection: S,
    zero_one: ContinuousGenerator,
    population_rng: DiscreteGenerator,
    population: Population,
    next: Population,
    stats: GeneticStats,
}

impl Rkga {
    /// Creates an RKGA.
    pub fn rkga(config: GeneticConfig) -> Self {
        Self::new(config, UniformParents)
    }
}

impl Brkga {
    /// Creates a BRKGA keeping `elite_size` elite individuals.
    pub fn brkga(config: GeneticConfig, elite_size: usize) -> Self {
        Self::new(config, EliteParents::new(elite_size))
    }

    /// Indices of the current elite set, fittest first.
    pub fn elite_indices(&self) -> &[usize] {
        self.selection.elite_indices()
    }
}

impl<S: ParentSelection> GeneticAlgorithm<S> {
    pub fn new(config: GeneticConfig, mut selection: S) -> Self {
        let base = config.seed.unwrap_or(DEFAULT_SEED);
        if let Some(rng) = selection.rng_mut() {
            rng.seed_from(base.wrapping_add(2));
        }
        let stats = GeneticStats::for_selection(&selection);
        Self {
            zero_one: ContinuousGenerator::from_seed(Some(base)),
            population_rng: DiscreteGenerator::from_seed(Some(base.wrapping_add(1))),
            population: Population::new(0, 0),
            next: Population::new(0, 0),
            stats,
            config,
            selection,
        }
    }

    pub fn config(&self) -> &GeneticConfig {
        &self.config
    }

    pub fn selection(&self) -> &S {
        &self.selection
    }

    pub fn stats(&self) -> &GeneticStats {
        &self.stats
    }

    /// Current population. Empty until [`initialize`](Self::initialize).
    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn population_size(&self) -> usize {
        self.population.len()
    }

    pub fn individual(&self, i: usize) -> Option<&Individual> {
        self.population.get(i)
    }

    /// Individual with the largest fitness.
    pub fn best_individual(&self) -> Option<&Individual> {
        self.selection
            .best_index(&self.population)
            .map(|i| &self.population[i])
    }

    /// Re-seeds every generator from operating-system entropy.
    pub fn seed(&mut self) {
        self.zero_one.seed();
        self.population_rng.seed();
        if let Some(rng) = self.selection.rng_mut() {
            rng.seed();
        }
    }

    /// Clears timing counters and progress.
    pub fn reset(&mut self) {
        self.stats = GeneticStats::for_selection(&self.selection);
    }

    /// Validates the configuration against the selection strategy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.selection.validate(&self.config)
    }

    /// Validates the configuration, then builds and decodes an initial
    /// population made entirely of mutants.
    ///
    /// Nothing is modified if validation fails.
    pub fn initialize<P: Problem>(&mut self, problem: &P) -> Result<(), ConfigError> {
        self.validate()?;
        self.initialize_into(&mut problem.clone())
    }

    /// Produces one complete replacement generation.
    ///
    /// Initializes the population first if needed.
    pub fn evolve<P: Problem>(&mut self, problem: &P) -> Result<(), ConfigError> {
        self.evolve_into(&mut problem.clone())
    }

    /// Builds the initial population, decoding every individual into `scratch`.
    fn initialize_into<P: Problem>(&mut self, scratch: &mut P) -> Result<(), ConfigError> {
        self.validate()?;

        let pop_size = self.config.population_size;
        let chrom_len = self.config.chromosome_length;
        self.population_rng
            .init_uniform(0, pop_size - 1)
            .map_err(|_| ConfigError::PopulationTooSmall(pop_size))?;
        self.selection.prepare(&self.config)?;
        self.reset();

        let start = Instant::now();
        self.population = Population::new(pop_size, chrom_len);
        self.next = Population::new(pop_size, chrom_len);
        for individual in self.population.iter_mut() {
            generate_mutant(scratch, individual, &mut self.zero_one);
        }
        self.selection.track(&self.population);
        self.stats.initial_time = start.elapsed();
        self.record_best();

        Ok(())
    }

    fn evolve_into<P: Problem>(&mut self, scratch: &mut P) -> Result<(), ConfigError> {
        if self.population.len() != self.config.population_size
            || self.next.len() != self.config.population_size
        {
            self.initialize_into(scratch)?;
        }

        let pop_size = self.config.population_size;
        let start = Instant::now();

        let mut slot = self.selection.copy_survivors(&self.population, &mut self.next);
        if let Some(elite_time) = self.stats.elite_time.as_mut() {
            *elite_time += start.elapsed();
        }

        let mutant_start = Instant::now();
        let mutant_end = slot + self.config.mutant_count;
        for individual in &mut self.next.as_mut_slice()[slot..mutant_end] {
            generate_mutant(scratch, individual, &mut self.zero_one);
        }
        slot = mutant_end;
        self.stats.mutant_time += mutant_start.elapsed();

        let crossover_start = Instant::now();
        for child in &mut self.next.as_mut_slice()[slot..pop_size] {
            let (p1, p2) = self.selection.select_parents(&mut self.population_rng);
            crossover(
                self.population[p1].chromosome(),
                self.population[p2].chromosome(),
                child.chromosome_mut(),
                self.config.inheritance_probability,
                &mut self.zero_one,
            );
            evaluate_individual(scratch, child);
            trace!(event = "crossover", parent1 = p1, parent2 = p2, fitness = child.fitness());
        }
        self.stats.crossover_time += crossover_start.elapsed();

        std::mem::swap(&mut self.population, &mut self.next);
        self.selection.track(&self.population);

        self.stats.generations += 1;
        self.stats.total_time += start.elapsed();
        self.record_best();

        Ok(())
    }

    /// Runs the full algorithm and materializes the fittest individual's
    /// solution into `problem`.
    ///
    /// Returns the cost of that solution, or `-inf` (leaving `problem`
    /// unchanged) if even the fittest individual is infeasible.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] before touching `problem` or the
    /// population if the size relationships are violated.
    pub fn run<P: Problem>(&mut self, problem: &mut P) -> Result<Cost, ConfigError> {
        let name = self.selection.name();
        if let Err(err) = self.validate() {
            error!(event = "invalid_config", algorithm = name, error = %err);
            return Err(err);
        }

        info!(
            event = "run_start",
            algorithm = name,
            population = self.config.population_size,
            mutants = self.config.mutant_count,
            generations = self.config.generations,
            chromosome_length = self.config.chromosome_length,
        );

        // the only copy of the instance made during a run
        let mut scratch = problem.clone();
        self.initialize_into(&mut scratch)?;
        for _ in 0..self.config.generations {
            self.evolve_into(&mut scratch)?;
        }

        let Some(best) = self.best_individual() else {
            return Ok(f64::NEG_INFINITY);
        };
        let cost = match scratch.decode(best.chromosome()) {
            Ok(cost) => {
                debug_sanity_check(&scratch, name, "decode");
                problem.copy_from(&scratch);
                cost
            }
            Err(infeasible) => {
                warn!(
                    event = "best_infeasible",
                    algorithm = name,
                    reason = infeasible.reason(),
                );
                f64::NEG_INFINITY
            }
        };

        info!(
            event = "run_end",
            algorithm = name,
            generations = self.stats.generations,
            cost,
            duration_ms = (self.stats.initial_time + self.stats.total_time).as_millis() as u64,
        );

        Ok(cost)
    }

    /// Recomputes the fitness of individual `i` by decoding its genes into
    /// `scratch`.
    pub fn reevaluate<P: Problem>(&self, scratch: &mut P, i: usize) -> Option<Cost> {
        self.population
            .get(i)
            .map(|ind| evaluate(scratch, ind.chromosome()))
    }

    fn record_best(&mut self) {
        let best = self
            .best_individual()
            .map_or(f64::NEG_INFINITY, Individual::fitness);
        let improved = self.stats.best_history.last().map_or(true, |&prev| best > prev);
        self.stats.best_history.push(best);
        if improved {
            debug!(
                event = "new_best",
                algorithm = self.stats.name,
                generation = self.stats.generations,
                fitness = best,
            );
        }
    }
}

impl<P: Problem, S: ParentSelection> Metaheuristic<P> for GeneticAlgorithm<S> {
    type Stats = GeneticStats;

    fn name(&self) -> &'static str {
        self.selection.name()
    }

    fn reset_algorithm(&mut self) {
        self.reset();
    }

    fn execute_algorithm(&mut self, problem: &mut P, cost: &mut Cost) -> bool {
        match self.run(problem) {
            Ok(best_cost) => {
                *cost = best_cost;
                true
            }
            Err(_) => false,
        }
    }

    fn stats(&self) -> &GeneticStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Infeasible;
    use crate::fixtures::Knapsack;
    use crate::genome::Chromosome;
    use crate::problem::LocalSearchPolicy;
    use std::cell::Cell;
    use std::rc::Rc;

    fn five_items() -> Knapsack {
        Knapsack::new(
            vec![6.0, 5.0, 8.0, 9.0, 6.0],
            vec![2.0, 3.0, 6.0, 7.0, 5.0],
            12.0,
        )
    }

    fn scenario_config() -> GeneticConfig {
        GeneticConfig::new(5)
            .with_population_size(10)
            .with_mutant_count(3)
            .with_generations(1)
            .with_inheritance_probability(0.7)
            .with_seed(42)
    }

    #[test]
    fn test_brkga_single_generation_layout() {
        let problem = five_items();
        let mut brkga = Brkga::brkga(scenario_config(), 2);
        brkga.initialize(&problem).unwrap();

        let prior = brkga.population().clone();
        let elite = brkga.elite_indices().to_vec();
        brkga.evolve(&problem).unwrap();
        let current = brkga.population();

        assert_eq!(current.len(), 10);

        // slots [0, 2): elite copied verbatim
        for (slot, &e) in elite.iter().enumerate() {
            assert_eq!(current[slot], prior[e], "slot {slot} should copy elite {e}");
        }

        // slots [2, 5): fresh mutants
        for slot in 2..5 {
            assert!(
                prior.iter().all(|ind| ind.chromosome() != current[slot].chromosome()),
                "mutant in slot {slot} reproduces a prior individual"
            );
        }

        // slots [5, 10): offspring of one elite and one non-elite parent
        for slot in 5..10 {
            let child = current[slot].chromosome();
            let explained = elite.iter().any(|&e| {
                (0..prior.len()).filter(|n| !elite.contains(n)).any(|n| {
                    (0..child.len())
                        .all(|j| child[j] == prior[e].gene(j) || child[j] == prior[n].gene(j))
                })
            });
            assert!(explained, "offspring in slot {slot} has no valid parent pair");
        }

        // cached fitness matches a fresh decode of the stored genes
        let mut scratch = problem.clone();
        for i in 0..current.len() {
            assert_eq!(brkga.reevaluate(&mut scratch, i), Some(current[i].fitness()));
        }
    }

    #[test]
    fn test_rkga_single_generation_layout() {
        let problem = five_items();
        let mut rkga = Rkga::rkga(scenario_config());
        rkga.initialize(&problem).unwrap();
        let prior = rkga.population().clone();
        rkga.evolve(&problem).unwrap();
        let current = rkga.population();

        assert_eq!(current.len(), 10);
        for slot in 0..3 {
            assert!(prior.iter().all(|ind| ind.chromosome() != current[slot].chromosome()));
        }
        for slot in 3..10 {
            let child = current[slot].chromosome();
            let explained = (0..10).any(|a| {
                (0..10).filter(|&b| b != a).any(|b| {
                    (0..child.len())
                        .all(|j| child[j] == prior[a].gene(j) || child[j] == prior[b].gene(j))
                })
            });
            assert!(explained, "offspring in slot {slot} has no valid parent pair");
        }
    }

    #[test]
    fn test_brkga_elite_dominates_after_generations() {
        let problem = Knapsack::sample();
        let config = GeneticConfig::new(10)
            .with_population_size(30)
            .with_mutant_count(5)
            .with_seed(3);
        let mut brkga = Brkga::brkga(config, 6);
        brkga.initialize(&problem).unwrap();

        for _ in 0..10 {
            brkga.evolve(&problem).unwrap();
            let population = brkga.population();
            assert_eq!(population.len(), 30);
            assert_eq!(brkga.elite_indices().len(), 6);
            let worst_elite = brkga
                .elite_indices()
                .iter()
                .map(|&e| population[e].fitness())
                .fold(f64::INFINITY, f64::min);
            for i in (0..30).filter(|&i| !brkga.selection().is_elite(i)) {
                assert!(worst_elite >= population[i].fitness());
            }
        }
    }

    #[test]
    fn test_brkga_solves_knapsack() {
        let mut problem = Knapsack::sample();
        let config = GeneticConfig::new(10)
            .with_population_size(50)
            .with_mutant_count(10)
            .with_generations(60)
            .with_seed(42);
        let mut brkga = Brkga::brkga(config, 10);
        let cost = brkga.run(&mut problem).unwrap();

        assert!(cost >= 38.0, "expected a good packing, got {cost}");
        assert_eq!(cost, problem.value());
        assert!(problem.sanity_check());
        assert_eq!(brkga.stats().generations, 60);

        let history = &brkga.stats().best_history;
        assert_eq!(history.len(), 61);
        for window in history.windows(2) {
            assert!(window[1] >= window[0], "elite keeps the best: {} < {}", window[1], window[0]);
        }
        assert_eq!(history.last().copied(), Some(cost));
    }

    #[test]
    fn test_rkga_run() {
        let mut problem = Knapsack::sample();
        let config = GeneticConfig::new(10)
            .with_population_size(40)
            .with_mutant_count(8)
            .with_generations(30)
            .with_seed(7);
        let mut rkga = Rkga::rkga(config);
        let cost = rkga.run(&mut problem).unwrap();

        assert!(cost > f64::NEG_INFINITY);
        assert_eq!(cost, problem.value());
        assert_eq!(rkga.population_size(), 40);
        assert_eq!(rkga.best_individual().map(Individual::fitness), Some(cost));
    }

    #[test]
    fn test_same_seed_same_result() {
        let solve = || {
            let mut problem = Knapsack::sample();
            let config = GeneticConfig::new(10)
                .with_population_size(20)
                .with_mutant_count(4)
                .with_generations(10);
            let mut brkga = Brkga::brkga(config, 4);
            let cost = brkga.run(&mut problem).unwrap();
            (cost, brkga.population().clone())
        };
        assert_eq!(solve(), solve());
    }

    #[test]
    fn test_invalid_sizes_leave_state_untouched() {
        let original = Knapsack::sample();
        let mut problem = original.clone();
        let config = GeneticConfig::new(10)
            .with_population_size(5)
            .with_mutant_count(5);
        let mut brkga = Brkga::brkga(config, 1);
        let mut cost = -12.5;

        assert!(!Metaheuristic::execute_algorithm(&mut brkga, &mut problem, &mut cost));
        assert_eq!(cost, -12.5);
        assert_eq!(problem, original);
        assert!(brkga.population().is_empty());
        assert!(brkga.stats().best_history.is_empty());
    }

    #[test]
    fn test_elite_plus_mutants_rejected() {
        let mut problem = Knapsack::sample();
        let config = GeneticConfig::new(10)
            .with_population_size(5)
            .with_mutant_count(3);
        let mut brkga = Brkga::brkga(config, 2);
        assert_eq!(
            brkga.run(&mut problem),
            Err(ConfigError::EliteAndMutantsExceedPopulation {
                elite: 2,
                mutants: 3,
                population: 5
            })
        );
        assert_eq!(problem, Knapsack::sample());
    }

    #[test]
    fn test_failed_rerun_keeps_population() {
        let mut problem = Knapsack::sample();
        let config = GeneticConfig::new(10)
            .with_population_size(10)
            .with_mutant_count(2)
            .with_generations(2);
        let mut rkga = Rkga::rkga(config);
        rkga.run(&mut problem).unwrap();
        let before = rkga.population().clone();

        rkga.config.mutant_count = 10;
        assert!(rkga.run(&mut problem).is_err());
        assert_eq!(rkga.population(), &before);
    }

    #[test]
    fn test_all_infeasible_leaves_problem() {
        // capacity 0: every non-empty selection is infeasible, the empty one is worth 0
        let original = Knapsack::new(vec![3.0, 4.0], vec![1.0, 1.0], 0.0);
        let mut problem = original.clone();
        let config = GeneticConfig::new(2)
            .with_population_size(6)
            .with_mutant_count(2)
            .with_generations(3);
        let cost = Rkga::rkga(config).run(&mut problem).unwrap();
        assert!(cost == 0.0 || cost == f64::NEG_INFINITY);
        if cost == f64::NEG_INFINITY {
            assert_eq!(problem, original);
        }
    }

    #[test]
    fn test_performance_report() {
        let mut problem = Knapsack::sample();
        let config = GeneticConfig::new(10)
            .with_population_size(10)
            .with_mutant_count(2)
            .with_generations(2);
        let mut brkga = Brkga::brkga(config, 2);
        let mut cost = 0.0;
        assert!(Metaheuristic::execute_algorithm(&mut brkga, &mut problem, &mut cost));
        let report = brkga.stats().to_string();
        assert!(report.starts_with("BRKGA algorithm performance:"));
        assert!(report.contains("copying elite"));

        let mut rkga = Rkga::rkga(
            GeneticConfig::new(10)
                .with_population_size(10)
                .with_mutant_count(2),
        );
        assert!(Metaheuristic::execute_algorithm(&mut rkga, &mut problem, &mut cost));
        assert!(!rkga.stats().to_string().contains("copying elite"));
        Metaheuristic::<Knapsack>::reset_algorithm(&mut rkga);
        assert_eq!(rkga.stats().generations, 0);
        assert!(rkga.stats().elite_time.is_none());
    }

    #[test]
    fn test_elite_timer_follows_strategy() {
        let brkga = Brkga::brkga(GeneticConfig::new(3), 2);
        assert_eq!(brkga.stats().elite_time, Some(Duration::ZERO));

        let stats = GeneticStats {
            name: "BRKGA",
            ..GeneticStats::default()
        };
        assert!(!stats.to_string().contains("copying elite"));
    }

    // ---- Counted: a problem that records every deep copy ----

    #[derive(Debug)]
    struct Counted {
        clones: Rc<Cell<usize>>,
        weights: Vec<f64>,
        cost: f64,
    }

    impl Clone for Counted {
        fn clone(&self) -> Self {
            self.clones.set(self.clones.get() + 1);
            Self {
                clones: Rc::clone(&self.clones),
                weights: self.weights.clone(),
                cost: self.cost,
            }
        }
    }

    impl Problem for Counted {
        fn empty(&self) -> Self {
            let mut empty = self.clone();
            empty.cost = 0.0;
            empty
        }

        fn copy_from(&mut self, other: &Self) {
            self.cost = other.cost;
        }

        fn decode(&mut self, chromosome: &Chromosome) -> Result<Cost, Infeasible> {
            self.cost = chromosome
                .iter()
                .zip(&self.weights)
                .map(|(g, w)| g * w)
                .sum();
            Ok(self.cost)
        }

        fn random_construct(
            &mut self,
            _rng: &mut DiscreteGenerator,
            _alpha: f64,
        ) -> Result<Cost, Infeasible> {
            Ok(self.cost)
        }

        fn best_neighbour(
            &mut self,
            current_cost: Cost,
            _policy: LocalSearchPolicy,
        ) -> (Option<Self>, Cost) {
            (None, current_cost)
        }
    }

    #[test]
    fn test_run_copies_instance_once() {
        let clones = Rc::new(Cell::new(0));
        let mut problem = Counted {
            clones: Rc::clone(&clones),
            weights: vec![1.0; 5],
            cost: 0.0,
        };
        let config = GeneticConfig::new(5)
            .with_population_size(10)
            .with_mutant_count(3)
            .with_generations(5);
        let mut brkga = Brkga::brkga(config, 2);
        let cost = brkga.run(&mut problem).unwrap();

        assert_eq!(clones.get(), 1);
        assert_eq!(cost, problem.cost);
        assert_eq!(brkga.best_individual().map(Individual::fitness), Some(cost));

        clones.set(0);
        Rkga::rkga(GeneticConfig::new(5).with_population_size(10).with_mutant_count(3))
            .run(&mut problem)
            .unwrap();
        assert_eq!(clones.get(), 1);
    }
}
