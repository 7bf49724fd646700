//! Plugin resolver: string keys to method/filter/decorator instances.
//!
//! Built once at bootstrap (register everything, including the built-in
//! methods via [`Resolver::with_builtin_methods`]), then treated as
//! read-only: lookups take `&self` and nothing mutates afterwards, so a
//! shared resolver serves concurrent allocation requests without locking.
//! `BTreeMap` keeps `list_*` output in stable ascending key order.

use std::collections::BTreeMap;

use seats_core::{
    PluginKind, ResultDecorator, SeatAllocationError, SeatAllocationMethod, TallyFilter,
};

use crate::highest_averages::HighestAveragesMethod;

type BoxedMethod = Box<dyn SeatAllocationMethod + Send + Sync>;
type BoxedFilter = Box<dyn TallyFilter + Send + Sync>;
type BoxedDecorator = Box<dyn ResultDecorator + Send + Sync>;

#[derive(Default)]
pub struct Resolver {
    methods: BTreeMap<String, BoxedMethod>,
    tally_filters: BTreeMap<String, BoxedFilter>,
    result_decorators: BTreeMap<String, BoxedDecorator>,
}

impl Resolver {
    /// Empty resolver; callers register everything themselves.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver pre-populated with the built-in highest-averages methods:
    /// `dhondt`, `sainte-lague`, `imperiali`.
    pub fn with_builtin_methods() -> Self {
        let mut resolver = Self::new();
        for method in [
            HighestAveragesMethod::dhondt(),
            HighestAveragesMethod::sainte_lague(),
            HighestAveragesMethod::imperiali(),
        ] {
            let key = method.name().to_string();
            resolver.methods.insert(key, Box::new(method));
        }
        resolver
    }

    pub fn register_method(
        &mut self,
        key: impl Into<String>,
        method: impl SeatAllocationMethod + Send + Sync + 'static,
    ) {
        self.methods.insert(key.into(), Box::new(method));
    }

    pub fn register_tally_filter(
        &mut self,
        key: impl Into<String>,
        filter: impl TallyFilter + Send + Sync + 'static,
    ) {
        self.tally_filters.insert(key.into(), Box::new(filter));
    }

    pub fn register_result_decorator(
        &mut self,
        key: impl Into<String>,
        decorator: impl ResultDecorator + Send + Sync + 'static,
    ) {
        self.result_decorators.insert(key.into(), Box::new(decorator));
    }

    pub fn resolve_method(
        &self,
        key: &str,
    ) -> Result<&dyn SeatAllocationMethod, SeatAllocationError> {
        self.methods
            .get(key)
            .map(|m| m.as_ref() as &dyn SeatAllocationMethod)
            .ok_or_else(|| unresolvable(PluginKind::Method, key))
    }

    pub fn resolve_tally_filter(&self, key: &str) -> Result<&dyn TallyFilter, SeatAllocationError> {
        self.tally_filters
            .get(key)
            .map(|f| f.as_ref() as &dyn TallyFilter)
            .ok_or_else(|| unresolvable(PluginKind::TallyFilter, key))
    }

    pub fn resolve_result_decorator(
        &self,
        key: &str,
    ) -> Result<&dyn ResultDecorator, SeatAllocationError> {
        self.result_decorators
            .get(key)
            .map(|d| d.as_ref() as &dyn ResultDecorator)
            .ok_or_else(|| unresolvable(PluginKind::ResultDecorator, key))
    }

    pub fn list_methods(&self) -> Vec<&str> {
        self.methods.keys().map(String::as_str).collect()
    }

    pub fn list_tally_filters(&self) -> Vec<&str> {
        self.tally_filters.keys().map(String::as_str).collect()
    }

    pub fn list_result_decorators(&self) -> Vec<&str> {
        self.result_decorators.keys().map(String::as_str).collect()
    }
}

fn unresolvable(kind: PluginKind, key: &str) -> SeatAllocationError {
    SeatAllocationError::UnresolvablePlugin {
        kind,
        key: key.to_string(),
    }
}
