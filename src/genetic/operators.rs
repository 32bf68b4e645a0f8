//! Random-key operators: evaluation, mutant generation, biased crossover.

use crate::genome::{Chromosome, Individual};
use crate::problem::{Cost, Problem};
use crate::random::ContinuousGenerator;

/// Decodes `chromosome` into `scratch` and returns its cost.
///
/// Infeasible genotypes are ranked at `f64::NEG_INFINITY`. Whatever
/// solution `scratch` held before is overwritten.
pub fn evaluate<P: Problem>(scratch: &mut P, chromosome: &Chromosome) -> Cost {
    scratch.decode(chromosome).unwrap_or(f64::NEG_INFINITY)
}

/// Decodes the individual's chromosome into `scratch` and stores the cost
/// as its fitness.
pub fn evaluate_individual<P: Problem>(scratch: &mut P, individual: &mut Individual) {
    let fitness = evaluate(scratch, individual.chromosome());
    individual.set_fitness(fitness);
}

/// Overwrites `individual` with a fresh random chromosome and evaluates it.
///
/// `rng` must be configured for `[0, 1)`.
pub fn generate_mutant<P: Problem>(
    scratch: &mut P,
    individual: &mut Individual,
    rng: &mut ContinuousGenerator,
) {
    rng.fill_uniform(individual.chromosome_mut().genes_mut());
    evaluate_individual(scratch, individual);
}

/// Parameterized uniform crossover.
///
/// For every gene a uniform value in `[0, 1)` is drawn; the child takes
/// `parent1`'s allele if the draw is `<= inheritance_probability` and
/// `parent2`'s otherwise. The child's fitness is left untouched.
///
/// # Panics
/// Panics if the chromosomes differ in length.
pub fn crossover(
    parent1: &Chromosome,
    parent2: &Chromosome,
    child: &mut Chromosome,
    inheritance_probability: f64,
    rng: &mut ContinuousGenerator,
) {
    assert!(
        parent1.len() == child.len() && parent2.len() == child.len(),
        "crossover requires chromosomes of equal length"
    );
    for (i, gene) in child.genes_mut().iter_mut().enumerate() {
        *gene = if rng.get_uniform() <= inheritance_probability {
            parent1[i]
        } else {
            parent2[i]
        };
    }
}
