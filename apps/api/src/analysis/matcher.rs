//! Skill Matcher — compares a candidate's skills against a job description.
//!
//! `score` is the share of the job's skills the candidate has
//! (|common| / |job|). `similarity` is the symmetric Jaccard overlap
//! (|common| / |candidate ∪ job|). Both are 0.0 when their denominator is empty.

use serde::{Deserialize, Serialize};

use crate::analysis::catalog::{SkillCatalog, SkillSet};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// 0.0 – 1.0, fraction of job skills covered.
    pub score: f64,
    /// 0.0 – 1.0, Jaccard overlap of the two sets.
    pub similarity: f64,
    pub common_skills: SkillSet,
    /// Job skills the candidate lacks.
    pub missing_skills: SkillSet,
    pub job_skills: SkillSet,
}

/// Compares two already-extracted skill sets.
pub fn match_skills(candidate: &SkillSet, job: &SkillSet) -> MatchResult {
    let common_skills: SkillSet = candidate.intersection(job).cloned().collect();
    let missing_skills: SkillSet = job.difference(candidate).cloned().collect();
    let union_len = candidate.union(job).count();

    MatchResult {
        score: ratio(common_skills.len(), job.len()),
        similarity: ratio(common_skills.len(), union_len),
        common_skills,
        missing_skills,
        job_skills: job.clone(),
    }
}

/// Extracts the job's skills with the same catalog, then compares.
pub fn match_job_description(
    catalog: &SkillCatalog,
    candidate: &SkillSet,
    job_description: &str,
) -> MatchResult {
    let job = catalog.extract(job_description);
    match_skills(candidate, &job)
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
