//! Plotting observer for convergence traces.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use linsys_core::Observer;
use linsys_solvers::iterative;

/// How a [`PlotObserver`] window is rendered.
///
/// Error norms shrink geometrically, so [`ShowConfig::log_y`] is usually
/// what you want.
#[derive(Debug, Clone, Default)]
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    log_y: bool,
    markers: bool,
}

impl ShowConfig {
    /// Creates a config with no title, no legend, a linear y-axis, and lines only.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Labels each series by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Plots log₁₀ of y. Non-positive values are skipped.
    #[must_use]
    pub fn log_y(mut self) -> Self {
        self.log_y = true;
        self
    }

    /// Draws a marker at every recorded point in addition to the line.
    #[must_use]
    pub fn markers(mut self) -> Self {
        self.markers = true;
        self
    }
}

/// Extracts plot coordinates from a solver event.
///
/// Implemented for [`iterative::Event`] as one series: the error norm
/// against the sweep number. Return `None` from [`x`][Plottable::x] to skip an
/// event, or `None` in a series slot to skip only that series.
pub trait Plottable<const N: usize> {
    fn x(&self) -> Option<f64>;

    fn series(&self) -> [Option<f64>; N];
}

impl Plottable<1> for iterative::Event<'_> {
    #[allow(clippy::cast_precision_loss)]
    fn x(&self) -> Option<f64> {
        Some(self.iter as f64)
    }

    fn series(&self) -> [Option<f64>; 1] {
        [Some(self.err_norm)]
    }
}

/// An observer that collects `N` series during a solve and shows them in an
/// egui window afterwards.
///
/// Pass `&mut PlotObserver` as the observer when the event is [`Plottable`].
/// To put several solves on one plot, call [`record`][PlotObserver::record]
/// from a closure observer instead:
///
/// ```ignore
/// let mut obs = PlotObserver::<2>::new(["Jacobi", "Gauss–Seidel"]);
/// jacobi::solve(&a, &b, None, &config, |e: &iterative::Event<'_>| {
///     obs.record(e.iter as f64, [Some(e.err_norm), None]);
///     None
/// })?;
/// gauss_seidel::solve(&a, &b, None, &config, |e: &iterative::Event<'_>| {
///     obs.record(e.iter as f64, [None, Some(e.err_norm)]);
///     None
/// })?;
/// obs.show(ShowConfig::new().legend().log_y())?;
/// ```
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    points: [Vec<[f64; 2]>; N],
}

impl PlotObserver<1> {
    /// Creates a single-series observer for an iterative solve's error norms.
    #[must_use]
    pub fn convergence() -> Self {
        Self::new(["Error norm"])
    }
}

impl<const N: usize> PlotObserver<N> {
    #[must_use]
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            points: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records one x value with a y value per series (`None` skips a series).
    pub fn record(&mut self, x: f64, ys: [Option<f64>; N]) {
        for (series, y) in self.points.iter_mut().zip(ys) {
            if let Some(y) = y {
                series.push([x, y]);
            }
        }
    }

    /// Returns the points recorded for series `index`.
    #[must_use]
    pub fn points(&self, index: usize) -> &[[f64; 2]] {
        self.points.get(index).map(Vec::as_slice).unwrap_or_default()
    }

    /// Opens a blocking egui window with every series, returning when the
    /// window is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let title = config.title.clone().unwrap_or_else(|| "linsys".to_owned());
        let series: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.points).collect();

        eframe::run_native(
            &title,
            eframe::NativeOptions::default(),
            Box::new(move |_cc| Ok(Box::new(PlotApp { series, config }))),
        )
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.series());
        }
        None
    }
}

/// Lets a solver borrow the observer so it can still be shown afterwards.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

struct PlotApp {
    series: Vec<(String, Vec<[f64; 2]>)>,
    config: ShowConfig,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("linsys_convergence").x_axis_label("iteration");
            if self.config.legend {
                plot = plot.legend(Legend::default());
            }
            plot = plot.y_axis_label(if self.config.log_y {
                "log₁₀ error norm"
            } else {
                "error norm"
            });

            plot.show(ui, |plot_ui| {
                for (name, points) in &self.series {
                    let transformed: Vec<[f64; 2]> = if self.config.log_y {
                        points
                            .iter()
                            .filter(|p| p[1] > 0.0)
                            .map(|p| [p[0], p[1].log10()])
                            .collect()
                    } else {
                        points.clone()
                    };
                    if self.config.markers {
                        plot_ui.points(
                            Points::new(PlotPoints::from(transformed.clone()))
                                .radius(2.5)
                                .name(name),
                        );
                    }
                    plot_ui.line(Line::new(PlotPoints::from(transformed)).name(name));
                }
            });
        });
    }
}
