use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::app::DashboardContext;
use crate::charts::{self, Figure};
use crate::data::filter::{PayloadRange, SiteSelection};
use crate::error::{DashError, Result};
use crate::layout::{PAYLOAD_SCATTER_ID, SUCCESS_PIE_ID};

// ---------------------------------------------------------------------------
// Selection state
// ---------------------------------------------------------------------------

/// A user-facing control whose value feeds the chart handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    Site,
    Payload,
}

/// Current values of the controls. Owned by the UI layer; handlers only
/// read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

impl SelectionState {
    /// Page defaults: every site, slider spanning the dataset's payloads.
    pub fn initial(ctx: &DashboardContext) -> Self {
        SelectionState {
            site: SiteSelection::All,
            payload: PayloadRange::from(ctx.bounds().slider_value()),
        }
    }
}

// ---------------------------------------------------------------------------
// Chart handlers
// ---------------------------------------------------------------------------

/// A pure function from (context, selection) to a figure, registered against
/// the controls it reads.
pub trait ChartHandler: Send + Sync {
    /// Id of the graph slot this handler fills.
    fn id(&self) -> &'static str;

    /// Controls whose changes make this chart stale.
    fn inputs(&self) -> &'static [Control];

    fn render(&self, ctx: &DashboardContext, selection: &SelectionState) -> Figure;
}

/// Success pie; reads the site dropdown only.
pub struct SuccessPieHandler;

impl ChartHandler for SuccessPieHandler {
    fn id(&self) -> &'static str {
        SUCCESS_PIE_ID
    }

    fn inputs(&self) -> &'static [Control] {
        &[Control::Site]
    }

    fn render(&self, ctx: &DashboardContext, selection: &SelectionState) -> Figure {
        Figure::Pie(charts::outcome_summary(ctx, &selection.site))
    }
}

/// Payload scatter; reads both controls.
pub struct PayloadScatterHandler;

impl ChartHandler for PayloadScatterHandler {
    fn id(&self) -> &'static str {
        PAYLOAD_SCATTER_ID
    }

    fn inputs(&self) -> &'static [Control] {
        &[Control::Site, Control::Payload]
    }

    fn render(&self, ctx: &DashboardContext, selection: &SelectionState) -> Figure {
        Figure::Scatter(charts::payload_outcome(
            ctx,
            &selection.site,
            selection.payload,
        ))
    }
}

/// A re-rendered figure addressed to its graph slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartUpdate {
    pub id: String,
    pub figure: Figure,
}

// ---------------------------------------------------------------------------
// Subscriptions
// ---------------------------------------------------------------------------

/// Registry of chart handlers, in registration order.
#[derive(Default)]
pub struct Subscriptions {
    handlers: Vec<Box<dyn ChartHandler>>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two charts of the launch dashboard.
    pub fn standard() -> Self {
        let mut subs = Self::new();
        subs.subscribe(SuccessPieHandler);
        subs.subscribe(PayloadScatterHandler);
        subs
    }

    pub fn subscribe<H: ChartHandler + 'static>(&mut self, handler: H) {
        self.handlers.push(Box::new(handler));
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.id()).collect()
    }

    /// Re-render every handler that reads one of the `changed` controls.
    pub fn notify(
        &self,
        ctx: &DashboardContext,
        selection: &SelectionState,
        changed: &[Control],
    ) -> Vec<ChartUpdate> {
        self.handlers
            .iter()
            .filter(|h| h.inputs().iter().any(|c| changed.contains(c)))
            .map(|h| render(h.as_ref(), ctx, selection))
            .collect()
    }

    pub fn render_all(&self, ctx: &DashboardContext, selection: &SelectionState) -> Vec<ChartUpdate> {
        self.handlers
            .iter()
            .map(|h| render(h.as_ref(), ctx, selection))
            .collect()
    }

    pub fn render_one(
        &self,
        id: &str,
        ctx: &DashboardContext,
        selection: &SelectionState,
    ) -> Result<ChartUpdate> {
        self.handlers
            .iter()
            .find(|h| h.id() == id)
            .map(|h| render(h.as_ref(), ctx, selection))
            .ok_or_else(|| DashError::UnknownChart(id.to_string()))
    }
}

fn render(handler: &dyn ChartHandler, ctx: &DashboardContext, selection: &SelectionState) -> ChartUpdate {
    let figure = handler.render(ctx, selection);
    log::debug!(
        "rendered {} for site={} payload=[{}, {}]: {}",
        handler.id(),
        selection.site,
        selection.payload.low,
        selection.payload.high,
        if figure.is_empty() { "empty" } else { "ok" }
    );
    ChartUpdate {
        id: handler.id().to_string(),
        figure,
    }
}

// ---------------------------------------------------------------------------
// Dashboard session
// ---------------------------------------------------------------------------

/// One UI session: holds the selection and pushes changes to the subscribed
/// handlers. Handlers never see the session, only the selection it passes.
///
/// This is the in-process counterpart of the browser page. The page keeps
/// the selection in JavaScript and posts it to `/api/update` with the
/// controls that changed; the server is stateless and calls
/// [`Subscriptions::notify`] directly. Use `Dashboard` to drive the same
/// handlers without HTTP, e.g. from a native front end or a test.
pub struct Dashboard {
    context: Arc<DashboardContext>,
    subscriptions: Arc<Subscriptions>,
    selection: SelectionState,
}

impl Dashboard {
    pub fn new(context: Arc<DashboardContext>, subscriptions: Arc<Subscriptions>) -> Self {
        let selection = SelectionState::initial(&context);
        Dashboard {
            context,
            subscriptions,
            selection,
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Figures for the initial page render.
    pub fn render_all(&self) -> Vec<ChartUpdate> {
        self.subscriptions.render_all(&self.context, &self.selection)
    }

    /// Change the dropdown value. Returns the charts that changed; selecting
    /// the current value again changes nothing.
    pub fn select_site(&mut self, site: impl Into<SiteSelection>) -> Vec<ChartUpdate> {
        let site = site.into();
        if site == self.selection.site {
            return Vec::new();
        }
        self.selection.site = site;
        self.subscriptions
            .notify(&self.context, &self.selection, &[Control::Site])
    }

    /// Change the slider value. A reversed pair is stored low-first.
    pub fn select_payload_range(&mut self, range: PayloadRange) -> Vec<ChartUpdate> {
        let range = range.normalized();
        if range == self.selection.payload {
            return Vec::new();
        }
        self.selection.payload = range;
        self.subscriptions
            .notify(&self.context, &self.selection, &[Control::Payload])
    }
}
