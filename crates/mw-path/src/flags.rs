/// Tunable constants for the path analysis engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisOpts {
    /// Radius around a site within which towers are fiber-reachable, in km.
    pub radius_km: f64,
    /// Propagation speed over the fiber access legs, in km per latency unit.
    pub fiber_speed: f64,
    /// Propagation speed over the microwave backbone, in km per latency unit.
    pub microwave_speed: f64,
    /// Aggregate stretch below which an alternate path is acceptable.
    pub stretch_threshold: f64,
}

impl Default for AnalysisOpts {
    fn default() -> Self {
        Self {
            radius_km: 50.0,
            fiber_speed: 200.0,
            microwave_speed: 300.0,
            stretch_threshold: 1.05,
        }
    }
}

impl AnalysisOpts {
    /// Latency-weighted stretch of a backbone path of `path_length_km`
    /// reached over `dist_fiber_km` of access fiber, relative to covering the
    /// direct site-to-site distance entirely at microwave speed.
    pub fn stretch_aggr(
        &self,
        dist_fiber_km: f64,
        path_length_km: f64,
        geo_dist_dc_km: f64,
    ) -> f64 {
        (dist_fiber_km / self.fiber_speed + path_length_km / self.microwave_speed)
            / (geo_dist_dc_km / self.microwave_speed)
    }
}
