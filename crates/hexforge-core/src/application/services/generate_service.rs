//! Generate Service - emits Java sources from stubs.
//!
//! Every generator follows the same workflow:
//! 1. Derive names and build the placeholder batch
//! 2. Resolve each file's package through the `PathResolver`
//! 3. Render the stub and write it, unless the file already exists

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{FileWriter, StubRenderer, StubStore},
    },
    domain::{
        DomainValidator as validator, PathResolver, PlaceholderBatch, layout, naming,
        placeholders, tokens,
    },
    error::HexforgeResult,
};

/// Names of the stubs the generators ask for.
pub mod stubs {
    pub const MODEL: &str = "mvc/model";
    pub const ENTITY: &str = "mvc/entity";
    pub const CRUD_REPOSITORY: &str = "mvc/repository";
    pub const MAPPER: &str = "mvc/mapper";
    pub const SERVICE: &str = "mvc/service";
    pub const SERVICE_RESOURCES: &str = "mvc/service-resources";
    pub const CONTROLLER: &str = "mvc/controller";
    pub const CONTROLLER_RESOURCES: &str = "mvc/controller-resources";

    pub const FACTORY: &str = "data/factory";
    pub const REPOSITORY: &str = "data/repository";
    pub const SEEDER: &str = "data/seeder";
    pub const SEEDER_INTERFACE: &str = "data/seeder-interface";
    pub const SEED_RUNNER: &str = "data/seed-runner";

    pub const ALL: [&str; 13] = [
        MODEL,
        ENTITY,
        CRUD_REPOSITORY,
        MAPPER,
        SERVICE,
        SERVICE_RESOURCES,
        CONTROLLER,
        CONTROLLER_RESOURCES,
        FACTORY,
        REPOSITORY,
        SEEDER,
        SEEDER_INTERFACE,
        SEED_RUNNER,
    ];
}

// ── Requests ─────────────────────────────────────────────────────────────────

/// `make:crud` inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrudRequest {
    pub entity: String,
    pub with_model: bool,
    pub with_service: bool,
    /// Use the `*-resources` service and controller stubs.
    pub resources: bool,
}

impl CrudRequest {
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            with_model: true,
            with_service: true,
            resources: false,
        }
    }
}

/// `make:factory` inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryRequest {
    pub entity: String,
    pub aggregate: Option<String>,
}

/// `make:seeder` inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeederRequest {
    pub name: String,
    pub entity: String,
    pub aggregate: Option<String>,
}

// ── Report ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Created,
    /// The file was already there and was left alone.
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub class_name: String,
    pub package: String,
    pub outcome: FileOutcome,
}

/// What a generator run did, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub files: Vec<GeneratedFile>,
    pub warnings: Vec<String>,
}

impl GenerationReport {
    pub fn created(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files
            .iter()
            .filter(|f| f.outcome == FileOutcome::Created)
    }

    pub fn skipped(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files
            .iter()
            .filter(|f| f.outcome == FileOutcome::Skipped)
    }

    pub fn created_count(&self) -> usize {
        self.created().count()
    }
}

// ── Service ──────────────────────────────────────────────────────────────────

/// One file to emit.
struct Emission<'a> {
    stub: &'a str,
    class_name: String,
    package: String,
}

/// Main generation service.
///
/// Holds one resolver for the whole invocation; every generator reads it.
pub struct GenerateService {
    resolver: PathResolver,
    stubs: Box<dyn StubStore>,
    renderer: Box<dyn StubRenderer>,
    writer: Box<dyn FileWriter>,
    output_dir: PathBuf,
    strict: bool,
}

impl GenerateService {
    pub fn new(
        resolver: PathResolver,
        stubs: Box<dyn StubStore>,
        renderer: Box<dyn StubRenderer>,
        writer: Box<dyn FileWriter>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            resolver,
            stubs,
            renderer,
            writer,
            output_dir: output_dir.into(),
            strict: false,
        }
    }

    /// Refuse to write files that still contain unknown `{{TOKEN}}`s.
    pub fn with_strict_placeholders(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Model, entity, repository, mapper, service and controller for one entity.
    #[instrument(skip_all, fields(entity = %request.entity))]
    pub fn make_crud(&self, request: &CrudRequest) -> HexforgeResult<GenerationReport> {
        validator::validate_identifier("entity name", &request.entity)?;

        let entity = naming::capitalize(&request.entity);
        let lower = request.entity.to_lowercase();
        let plural = naming::pluralize(&lower);
        info!(entity = %entity, "Generating CRUD resource");

        let mut batch = self.base_batch();
        batch.insert(tokens::ENTITY_NAME, entity.as_str());
        batch.insert(tokens::ENTITY_NAME_LOWER, lower.as_str());
        batch.insert(tokens::ENTITY_NAME_PLURAL, plural.as_str());
        batch.insert(tokens::TABLE_NAME, plural.as_str());
        self.resolver
            .populate_crud_package_placeholders(&lower, &mut batch);

        let crud = |stub: &'static str, suffix: &str, key: &str| Emission {
            stub,
            class_name: format!("{entity}{suffix}"),
            package: self.resolver.resolve_crud(key, &lower),
        };

        let mut plan = Vec::with_capacity(6);
        if request.with_model {
            plan.push(crud(stubs::MODEL, "", "model"));
        }
        plan.push(crud(stubs::ENTITY, "Entity", "entity"));
        plan.push(crud(stubs::CRUD_REPOSITORY, "Repository", "repository"));
        plan.push(crud(stubs::MAPPER, "Mapper", "mapper"));
        if request.with_service {
            let stub = if request.resources {
                stubs::SERVICE_RESOURCES
            } else {
                stubs::SERVICE
            };
            plan.push(crud(stub, "Service", "service"));
        }
        let controller = if request.resources {
            stubs::CONTROLLER_RESOURCES
        } else {
            stubs::CONTROLLER
        };
        plan.push(crud(controller, "Controller", "controller"));

        self.emit_all(plan, &batch)
    }

    /// `<Entity>Factory`, plus the data repository it needs if missing.
    #[instrument(skip_all, fields(entity = %request.entity))]
    pub fn make_factory(&self, request: &FactoryRequest) -> HexforgeResult<GenerationReport> {
        validator::validate_identifier("entity name", &request.entity)?;

        let stem = naming::strip_entity_suffix(&request.entity);
        let entity = naming::capitalize(stem);
        let aggregate = self.aggregate(request.aggregate.as_deref(), stem)?;
        info!(entity = %entity, aggregate = %aggregate, "Generating factory");

        let repository_package = self.resolver.resolve("persistence", &aggregate);

        let mut batch = self.base_batch();
        batch.insert(tokens::ENTITY_NAME, entity.as_str());
        batch.insert(tokens::AGGREGATE, aggregate.as_str());
        batch.insert(tokens::PACKAGE_REPOSITORY, repository_package.as_str());
        self.resolver
            .populate_package_placeholders(&aggregate, &mut batch);

        let plan = vec![
            Emission {
                stub: stubs::FACTORY,
                class_name: format!("{entity}Factory"),
                package: self.resolver.resolve("factory", &aggregate),
            },
            Emission {
                stub: stubs::REPOSITORY,
                class_name: format!("{entity}Repository"),
                package: repository_package,
            },
        ];

        self.emit_all(plan, &batch)
    }

    /// A seeder class, plus the shared `Seeder` interface and `SeedRunner`.
    #[instrument(skip_all, fields(seeder = %request.name, entity = %request.entity))]
    pub fn make_seeder(&self, request: &SeederRequest) -> HexforgeResult<GenerationReport> {
        validator::validate_identifier("seeder name", &request.name)?;
        validator::validate_identifier("entity name", &request.entity)?;

        let class_name = naming::seeder_class_name(&request.name);
        let entity = naming::capitalize(&request.entity);
        let aggregate = self.aggregate(request.aggregate.as_deref(), &request.entity)?;
        info!(seeder = %class_name, aggregate = %aggregate, "Generating seeder");

        let seeder_package = self.resolver.resolve_static("seeder");

        let mut batch = self.base_batch();
        batch.insert(tokens::SEEDER_NAME, class_name.as_str());
        batch.insert(tokens::ENTITY_NAME, entity.as_str());
        batch.insert(tokens::AGGREGATE, aggregate.as_str());
        batch.insert(
            tokens::PACKAGE_FACTORY,
            self.resolver.resolve("factory", &aggregate),
        );
        batch.insert(
            tokens::PACKAGE_REPOSITORY,
            self.resolver.resolve("persistence", &aggregate),
        );
        self.resolver
            .populate_package_placeholders(&aggregate, &mut batch);

        let shared = |stub: &'static str, class: &str| Emission {
            stub,
            class_name: class.to_string(),
            package: seeder_package.clone(),
        };

        let plan = vec![
            shared(stubs::SEEDER, &class_name),
            shared(stubs::SEEDER_INTERFACE, "Seeder"),
            shared(stubs::SEED_RUNNER, "SeedRunner"),
        ];

        self.emit_all(plan, &batch)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn base_batch(&self) -> PlaceholderBatch {
        let mut batch = PlaceholderBatch::new();
        batch.insert(tokens::BASE_PACKAGE, self.resolver.base_package());
        batch
    }

    /// Explicit `-a` value or the fallback, lowercased.
    fn aggregate(&self, explicit: Option<&str>, fallback: &str) -> HexforgeResult<String> {
        let aggregate = explicit.unwrap_or(fallback);
        validator::validate_identifier("aggregate", aggregate)?;
        Ok(aggregate.to_lowercase())
    }

    /// Render every planned file, then write. A strict-mode failure or a
    /// missing stub therefore leaves the project untouched.
    fn emit_all(
        &self,
        plan: Vec<Emission<'_>>,
        batch: &PlaceholderBatch,
    ) -> HexforgeResult<GenerationReport> {
        let mut report = GenerationReport::default();
        let mut rendered = Vec::with_capacity(plan.len());
        for emission in plan {
            rendered.push(self.prepare(emission, batch, &mut report.warnings)?);
        }

        for (file, content) in rendered {
            if let Some(content) = content {
                if let Some(parent) = file.path.parent() {
                    self.writer.create_dir_all(parent)?;
                }
                self.writer.write_file(&file.path, &content)?;
                info!(path = %file.path.display(), "Created");
            }
            report.files.push(file);
        }

        info!(
            created = report.created_count(),
            skipped = report.skipped().count(),
            "Generation finished"
        );
        Ok(report)
    }

    /// Decide the outcome of one file and render it when it will be created.
    fn prepare(
        &self,
        emission: Emission<'_>,
        batch: &PlaceholderBatch,
        warnings: &mut Vec<String>,
    ) -> HexforgeResult<(GeneratedFile, Option<String>)> {
        let Emission {
            stub,
            class_name,
            package,
        } = emission;
        let path = layout::class_file(&self.output_dir, &package, &class_name);

        if self.writer.exists(&path) {
            debug!(path = %path.display(), "File exists, skipping");
            let file = GeneratedFile {
                path,
                class_name,
                package,
                outcome: FileOutcome::Skipped,
            };
            return Ok((file, None));
        }

        let unbound = placeholders(&package);
        if !unbound.is_empty() {
            let message = format!(
                "package '{}' for {} has unresolved {}",
                package,
                class_name,
                unbound
                    .iter()
                    .map(|v| format!("{{{v}}}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            warn!("{message}");
            warnings.push(message);
        }

        let text = self.stubs.load(stub)?;
        let batch = batch.with(tokens::PACKAGE, package.as_str());
        let content = self.renderer.render(stub, &text, &batch)?;

        let leftover = batch.unresolved_tokens(&content);
        if !leftover.is_empty() {
            let listed = leftover.join(", ");
            if self.strict {
                return Err(ApplicationError::RenderingFailed {
                    stub: stub.to_string(),
                    reason: format!("unknown placeholders {listed}"),
                }
                .into());
            }
            let message = format!("{class_name}: stub '{stub}' left {listed} unreplaced");
            warn!("{message}");
            warnings.push(message);
        }

        let file = GeneratedFile {
            path,
            class_name,
            package,
            outcome: FileOutcome::Created,
        };
        Ok((file, Some(content)))
    }
}
