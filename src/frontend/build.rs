//! The build driver: one call per compilation unit.

use rayon::prelude::*;

use super::assembler::assemble_whole_module;
use super::auto_import::{AutoImporter, ConfiguredAutoImporter, trigger_auto_import};
use super::error::FrontendError;
use super::factory::create_unit;
use super::options::BuildOptions;
use super::pump::pump_single_buffer;
use super::session::{Session, UnitHandle};
use crate::base::BufferId;
use crate::parser::{SourceParser, UnitParser};
use crate::sema::{DeclChecker, SemanticChecker};
use crate::syntax::{IrModule, UnitKind};

/// Builds compilation units with a fixed set of collaborators.
#[derive(Debug, Clone, Default)]
pub struct Frontend<P = SourceParser, C = DeclChecker, A = ConfiguredAutoImporter> {
    parser: P,
    checker: C,
    importer: A,
}

impl Frontend {
    /// A frontend with the built-in parser, checker and auto-importer.
    pub fn standard() -> Self {
        Self::default()
    }
}

impl<P, C, A> Frontend<P, C, A>
where
    P: UnitParser,
    C: SemanticChecker,
    A: AutoImporter,
{
    pub fn new(parser: P, checker: C, importer: A) -> Self {
        Self {
            parser,
            checker,
            importer,
        }
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    pub fn checker(&self) -> &C {
        &self.checker
    }

    pub fn importer(&self) -> &A {
        &self.importer
    }

    /// Build one compilation unit from `buffers` and register it in `session`.
    ///
    /// With more than one buffer the unit is assembled as a whole module and
    /// checked once; with a single buffer parsing and checking are pumped
    /// incrementally. `ir_module` is only used by IR-buffer builds.
    ///
    /// Request errors are detected before any unit is created. If a build
    /// aborts later, its registration is rolled back and no unit is returned.
    pub fn build_unit(
        &self,
        session: &Session,
        output_name: &str,
        buffers: &[BufferId],
        options: &BuildOptions,
        ir_module: Option<&mut IrModule>,
    ) -> Result<UnitHandle, FrontendError> {
        let _span = tracing::debug_span!("build_unit", output_name, kind = ?options.kind).entered();

        let (&first, rest) = buffers.split_first().ok_or_else(|| FrontendError::NoBuffers {
            output_name: output_name.to_string(),
        })?;
        if !rest.is_empty() && options.kind != UnitKind::Library {
            return Err(FrontendError::BatchRequiresLibrary { kind: options.kind });
        }
        if let Some(&missing) = buffers.iter().find(|&&b| session.sources().buffer(b).is_none()) {
            return Err(FrontendError::UnknownBuffer(missing));
        }

        let registration = create_unit(session, output_name, options)?;
        let outcome = {
            let mut unit = registration.handle.write();
            trigger_auto_import(&self.importer, session, &mut unit, options);
            if rest.is_empty() {
                pump_single_buffer(
                    &self.parser,
                    &self.checker,
                    session,
                    &mut unit,
                    first,
                    options,
                    ir_module,
                )
            } else {
                assemble_whole_module(
                    &self.parser,
                    &self.checker,
                    session,
                    &mut unit,
                    buffers,
                    options,
                )
            }
        };

        match outcome {
            Ok(()) => {
                tracing::debug!(
                    module = %registration.name,
                    decls = registration.handle.read().decls.len(),
                    "built unit"
                );
                Ok(registration.handle)
            }
            Err(err) => {
                tracing::error!(module = %registration.name, error = %err, "build aborted");
                session.unregister(registration);
                Err(err)
            }
        }
    }

    /// Build independent units concurrently against one session.
    ///
    /// Results come back in request order. No IR module is passed to any
    /// build.
    pub fn build_units_parallel(
        &self,
        session: &Session,
        requests: &[BuildRequest],
    ) -> Vec<Result<UnitHandle, FrontendError>> {
        requests
            .par_iter()
            .map(|request| {
                self.build_unit(
                    session,
                    &request.output_name,
                    &request.buffers,
                    &request.options,
                    None,
                )
            })
            .collect()
    }
}

/// One entry of a parallel build.
#[derive(Debug, Clone)]
pub struct BuildRequest {
    pub output_name: String,
    pub buffers: Vec<BufferId>,
    pub options: BuildOptions,
}

impl BuildRequest {
    pub fn new(output_name: impl Into<String>, buffers: Vec<BufferId>, options: BuildOptions) -> Self {
        Self {
            output_name: output_name.into(),
            buffers,
            options,
        }
    }
}
