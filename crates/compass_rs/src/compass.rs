//! The [`LifeCompass`] pipeline.

use chrono::Utc;
use compass_astro::{GeoLocation, HouseSystem, NodeChart, NodeMode, compute_nodes};
use compass_config::{CompassConfig, NodeModeSetting};
use compass_geo::{PlaceTable, TimezoneResolver};
use compass_narrative::{LifeCompassResult, ThemeTables, compose};
use compass_time::{BirthMoment, to_utc};

use crate::error::CompassError;
use crate::input::BirthInput;
use crate::report::{PlaceResolution, ProfileReport};

/// Computation choices fixed for the lifetime of a [`LifeCompass`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompassOptions {
    pub house_system: HouseSystem,
    pub node_mode: NodeMode,
}

/// Place, timezone and theme tables plus options.
///
/// Holds no mutable state; share one instance across threads.
#[derive(Debug)]
pub struct LifeCompass {
    places: PlaceTable,
    timezones: TimezoneResolver,
    themes: ThemeTables,
    options: CompassOptions,
}

impl LifeCompass {
    pub fn new(
        places: PlaceTable,
        timezones: TimezoneResolver,
        themes: ThemeTables,
        options: CompassOptions,
    ) -> Self {
        tracing::info!(
            places = places.len(),
            house_system = options.house_system.name(),
            node_mode = options.node_mode.name(),
            "life compass initialized"
        );
        Self {
            places,
            timezones,
            themes,
            options,
        }
    }

    /// Build from configuration. A missing or unreadable place table
    /// degrades to an unavailable one; a configured theme file must load.
    pub fn from_config(config: &CompassConfig) -> Result<Self, CompassError> {
        let places = PlaceTable::load_or_unavailable(&config.data.places);
        let themes = match &config.data.themes {
            Some(path) => ThemeTables::builtin().merged_with(ThemeTables::load(path)?),
            None => ThemeTables::builtin(),
        };
        let node_mode = match config.astro.node_mode {
            NodeModeSetting::Mean => NodeMode::Mean,
            NodeModeSetting::True => NodeMode::True,
        };
        let options = CompassOptions {
            node_mode,
            ..CompassOptions::default()
        };
        Ok(Self::new(places, TimezoneResolver::polygons(), themes, options))
    }

    pub fn places(&self) -> &PlaceTable {
        &self.places
    }

    pub fn themes(&self) -> &ThemeTables {
        &self.themes
    }

    pub fn options(&self) -> CompassOptions {
        self.options
    }

    /// Place name → coordinates and timezone.
    pub fn resolve_place(&self, query: &str) -> Result<PlaceResolution, CompassError> {
        let result = self.place(query);
        match &result {
            Ok(p) => tracing::info!(
                query,
                lat = p.lat,
                lon = p.lon,
                timezone = %p.timezone,
                "place resolved"
            ),
            Err(e) => log_failure("resolve_place", e),
        }
        result
    }

    /// Resolve the place and convert the birth wall-clock time to UTC.
    pub fn birth_moment(
        &self,
        input: &BirthInput,
    ) -> Result<(PlaceResolution, BirthMoment), CompassError> {
        let place = self.place(&input.place)?;
        let moment = to_utc(input.date, input.time, &place.timezone)?;
        tracing::debug!(
            local = %moment.local,
            utc = %moment.utc,
            resolution = moment.resolution.name(),
            "birth moment"
        );
        Ok((place, moment))
    }

    /// All intermediate values for a birth, without the narrative.
    pub fn node_chart(&self, input: &BirthInput) -> Result<ProfileReport, CompassError> {
        let result = self
            .validated_chart(input)
            .map(|(place, moment, chart)| ProfileReport::new(place, &moment, &chart));
        if let Err(e) = &result {
            log_failure("node_chart", e);
        }
        result
    }

    /// Full pipeline: validate, resolve, compute, compose.
    pub fn build_profile(&self, input: &BirthInput) -> Result<LifeCompassResult, CompassError> {
        tracing::info!(place = %input.place, "start build_profile");
        let result = self.validated_chart(input).and_then(|(_, _, chart)| {
            compose(
                &self.themes,
                chart.south.placement(),
                chart.north.placement(),
            )
            .map_err(CompassError::from)
        });
        match &result {
            Ok(r) => tracing::info!(title = %r.title, "profile built"),
            Err(e) => log_failure("build_profile", e),
        }
        result
    }

    fn place(&self, query: &str) -> Result<PlaceResolution, CompassError> {
        let coords = self.places.resolve(query)?;
        let timezone = self.timezones.resolve_coordinates(&coords)?;
        Ok(PlaceResolution {
            query: query.to_string(),
            lat: coords.lat,
            lon: coords.lon,
            timezone,
        })
    }

    fn validated_chart(
        &self,
        input: &BirthInput,
    ) -> Result<(PlaceResolution, BirthMoment, NodeChart), CompassError> {
        input.validate(Utc::now().date_naive())?;
        let (place, moment) = self.birth_moment(input)?;
        let chart = compute_nodes(
            &moment.utc,
            &GeoLocation::new(place.lat, place.lon),
            self.options.house_system,
            self.options.node_mode,
        )?;
        tracing::debug!(
            jd_ut = chart.jd_ut,
            north_lon = chart.north.longitude_deg,
            north_sign = chart.north.sign.sign.name(),
            north_house = chart.north.house,
            south_sign = chart.south.sign.sign.name(),
            south_house = chart.south.house,
            house_system = chart.system.name(),
            "nodes computed"
        );
        Ok((place, moment, chart))
    }
}

fn log_failure(operation: &str, err: &CompassError) {
    if err.is_user_correctable() {
        tracing::warn!(operation, kind = err.kind().name(), error = %err, "request rejected");
    } else {
        tracing::error!(operation, kind = err.kind().name(), error = %err, "request failed");
    }
}
