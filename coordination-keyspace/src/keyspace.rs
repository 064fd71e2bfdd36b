use crate::error::{Error, Result};

/// Literal segment under which processors register themselves.
const PROCESSORS_SEGMENT: &str = "processors";

/// Literal segment under which job-model version tracking and barrier
/// metadata live.
const JOB_MODEL_GENERATION_SEGMENT: &str = "JobModelGeneration";

/// All coordination-service key patterns used for one job deployment.
///
/// The deployment prefix is held by [`JobKeyspace`], so keys within a
/// keyspace instance are implicitly deployment-scoped.
///
/// Full key scheme:
/// ```text
/// /{prefix}
/// /{prefix}/processors
/// /{prefix}/JobModelGeneration/jobModelVersion
/// /{prefix}/JobModelGeneration/jobModels
/// /{prefix}/JobModelGeneration/jobModels/{version}
/// /{prefix}/JobModelGeneration/{barrier_id}/versionBarriers
/// ```
///
/// `processors` and `JobModelGeneration` are fixed segments of the scheme,
/// not caller-configurable: they partition the keyspace so processor
/// registration nodes can never collide with job-model metadata, whatever
/// the version or barrier identifier values are.
enum JobKey<'a> {
    Root,
    ProcessorsRoot,
    /// Leaf whose data is the currently active job-model version.
    JobModelVersion,
    /// Parent of one child per job-model version.
    JobModelsRoot,
    JobModel(&'a str),
    /// Each barrier instance gets its own subtree, keyed between
    /// `JobModelGeneration` and `versionBarriers`.
    VersionBarrierPrefix(&'a str),
}

impl JobKey<'_> {
    fn resolve(&self, prefix: &str) -> String {
        match self {
            JobKey::Root => format!("/{prefix}"),
            JobKey::ProcessorsRoot => format!("/{prefix}/{PROCESSORS_SEGMENT}"),
            JobKey::JobModelVersion => {
                format!("/{prefix}/{JOB_MODEL_GENERATION_SEGMENT}/jobModelVersion")
            }
            JobKey::JobModelsRoot => {
                format!("/{prefix}/{JOB_MODEL_GENERATION_SEGMENT}/jobModels")
            }
            JobKey::JobModel(version) => {
                format!("/{prefix}/{JOB_MODEL_GENERATION_SEGMENT}/jobModels/{version}")
            }
            JobKey::VersionBarrierPrefix(barrier_id) => {
                format!("/{prefix}/{JOB_MODEL_GENERATION_SEGMENT}/{barrier_id}/versionBarriers")
            }
        }
    }
}

/// Key builder for one job deployment's coordination metadata.
///
/// Holds the deployment prefix (conventionally `{job_name}-{job_id}`) and
/// renders the fixed set of paths in [`JobKey`]. Construction validates the
/// prefix once; instances are immutable afterwards and cheap to clone and
/// share across tasks.
///
/// This type only produces key strings. Creating, reading, or watching the
/// nodes at those keys is the coordination-service client's job.
#[derive(Debug, Clone)]
pub struct JobKeyspace {
    prefix: String,
}

impl JobKeyspace {
    /// Build a keyspace for the given deployment prefix.
    ///
    /// The prefix is trimmed of surrounding whitespace and must be non-empty
    /// afterwards; otherwise this fails with [`Error::InvalidConfig`].
    pub fn new(prefix: &str) -> Result<Self> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Err(Error::InvalidConfig(
                "deployment prefix cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            prefix: prefix.to_string(),
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn key(&self, k: JobKey<'_>) -> String {
        k.resolve(&self.prefix)
    }

    /// Root of this deployment's subtree: `/{prefix}`.
    pub fn root_path(&self) -> String {
        self.key(JobKey::Root)
    }

    /// Parent under which each live processor registers one child node.
    pub fn processors_path(&self) -> String {
        self.key(JobKey::ProcessorsRoot)
    }

    /// Leaf node whose data holds the currently active job-model version.
    pub fn job_model_version_path(&self) -> String {
        self.key(JobKey::JobModelVersion)
    }

    /// Parent under which one node per job-model version is stored.
    pub fn job_model_path_prefix(&self) -> String {
        self.key(JobKey::JobModelsRoot)
    }

    /// Node holding the job model for `version`.
    pub fn job_model_path(&self, version: &str) -> String {
        self.key(JobKey::JobModel(version))
    }

    /// Parent under which barrier-participation records for one barrier
    /// instance are stored.
    pub fn job_model_version_barrier_prefix(&self, barrier_id: &str) -> String {
        self.key(JobKey::VersionBarrierPrefix(barrier_id))
    }
}

/// Extract the trailing identifier from a coordination-service key, e.g. the
/// processor id from `/{prefix}/processors/{processor_id}` or the version
/// from a job-model key.
///
/// Returns `None` for an empty input (no key yet is a legitimate caller
/// state, not an error). A key with no separator is returned whole. No
/// validation is done that the input is a key this crate produced.
pub fn parse_id_from_path(path: &str) -> Option<&str> {
    if path.is_empty() {
        return None;
    }
    path.rsplit('/').next()
}
