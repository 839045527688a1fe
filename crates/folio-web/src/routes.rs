use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Form, Router};
use time::OffsetDateTime;
use tower_http::cors::CorsLayer;

use folio_core::{compute_projection, compute_valuation, TradingDate};
use folio_data::PriceSource;

use crate::chart::{line_chart, ChartSeries};
use crate::error::WebError;
use crate::forms::{ProjectionForm, StocksForm, DEFAULT_START_DATE};
use crate::pages::{self, ProjectionView, StocksView};

/// Shared per-process state: one stateless price source behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn PriceSource>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/stocks", get(stocks_form).post(stocks_submit))
        .route("/projection", get(projection_form).post(projection_submit))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn today() -> TradingDate {
    TradingDate::from_date(OffsetDateTime::now_utc().date())
}

async fn index() -> Html<String> {
    Html(pages::index_page())
}

async fn stocks_form() -> Html<String> {
    let view = StocksView {
        start_date: String::from(DEFAULT_START_DATE),
        end_date: today().format_iso(),
        ..StocksView::default()
    };
    Html(pages::stocks_page(&view))
}

async fn stocks_submit(
    State(state): State<AppState>,
    Form(form): Form<StocksForm>,
) -> Html<String> {
    let mut view = StocksView {
        start_date: form.start_date.clone(),
        end_date: form.end_date.clone(),
        holdings: form.holdings.clone(),
        ..StocksView::default()
    };

    match run_backtest(&state, &form).await {
        Ok(chart) => view.chart = Some(chart),
        Err(error) => view.error = Some(error.user_message()),
    }

    Html(pages::stocks_page(&view))
}

async fn run_backtest(state: &AppState, form: &StocksForm) -> Result<String, WebError> {
    let input = form.coerce(today())?;

    let source = Arc::clone(&state.source);
    let request = input.request.clone();
    let prices =
        tokio::task::spawn_blocking(move || source.daily_closes(&request)).await??;

    let series = compute_valuation(&input.allocations, &prices)?;

    let x_labels: Vec<String> = series
        .dates()
        .iter()
        .map(|date| date.format_iso())
        .collect();
    let mut lines: Vec<ChartSeries> = series
        .columns()
        .iter()
        .map(|column| ChartSeries {
            label: column.label().to_owned(),
            values: column.values().to_vec(),
        })
        .collect();
    if lines.len() > 1 {
        lines.push(ChartSeries {
            label: String::from("Total"),
            values: series.totals().to_vec(),
        });
    }

    Ok(line_chart("Value of Investments", &x_labels, &lines))
}

async fn projection_form() -> Html<String> {
    Html(pages::projection_page(&ProjectionView::default()))
}

async fn projection_submit(Form(form): Form<ProjectionForm>) -> Html<String> {
    let mut view = ProjectionView {
        start_amount: form.start_amount.clone(),
        years: form.years.clone(),
        months: form.months.clone(),
        annual_return_rate: form.annual_return_rate.clone(),
        contribution_amount: form.contribution_amount.clone(),
        contribution_timing: form.contribution_timing.clone(),
        ..ProjectionView::default()
    };

    match run_projection(&form) {
        Ok((chart, final_value)) => {
            view.chart = Some(chart);
            view.final_value = Some(final_value);
        }
        Err(error) => view.error = Some(error.user_message()),
    }

    Html(pages::projection_page(&view))
}

fn run_projection(form: &ProjectionForm) -> Result<(String, f64), WebError> {
    let params = form.coerce()?;
    let trajectory = compute_projection(&params)?;

    let x_labels: Vec<String> = trajectory
        .months()
        .map(|(month, _)| month.to_string())
        .collect();
    let lines = [ChartSeries {
        label: String::from("Projected wealth"),
        values: trajectory.values().to_vec(),
    }];

    Ok((
        line_chart("Projected Wealth by Month", &x_labels, &lines),
        trajectory.final_value(),
    ))
}
