//! Console report formatting
//!
//! Renders the core's result types for the terminal. The JSON path in
//! `main` bypasses this module entirely.

use chrono::Local;
use colored::Colorize;
use pulse_domain::{AnalysisResult, ComparisonItem, OverallSentiment, Sentiment, StockSnapshot};

/// Format a single-company sentiment report
pub fn format_analysis(result: &AnalysisResult) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\n{} — {}\n",
        "Company Pulse".bold(),
        result.company_name
    ));
    out.push_str(&format!(
        "Generated {}\n\n",
        Local::now().format("%Y-%m-%d %H:%M")
    ));

    out.push_str(&format!(
        "Overall sentiment: {}\n",
        paint_overall(result.overall_sentiment)
    ));

    if !result.sentiment_trends.is_empty() {
        out.push_str("\nSentiment trends:\n");
        for trend in &result.sentiment_trends {
            out.push_str(&format!(
                "  {:<18} {:<10} x{}\n",
                trend.aspect,
                paint_sentiment(trend.sentiment),
                trend.occurrences
            ));
        }
    }

    if !result.key_aspects.is_empty() {
        out.push_str("\nKey aspects:\n");
        for aspect in &result.key_aspects {
            out.push_str(&format!(
                "  {}: {}\n",
                aspect.aspect.bold(),
                aspect.description
            ));
        }
    }

    match &result.stock {
        Some(stock) => {
            out.push('\n');
            out.push_str(&format_stock(stock));
        }
        None => {
            out.push_str(&format!(
                "\n{}\n",
                "Market data unavailable for this report.".dimmed()
            ));
        }
    }

    out
}

/// Format a multi-company comparison, one row per requested company
pub fn format_comparison(items: &[ComparisonItem]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\n{:<8} {:>10} {:>9} {:>9} {:>10} {:>10} {:>9}\n",
        "TICKER", "PRICE", "CHANGE", "CHANGE%", "DAY LOW", "DAY HIGH", "MKT CAP"
    ));

    for item in items {
        match item {
            ComparisonItem::Quote(stock) => {
                out.push_str(&format!(
                    "{:<8} {:>10.2} {:>9} {:>9} {:>10.2} {:>10.2} {:>9}\n",
                    stock.ticker,
                    stock.price,
                    paint_change(stock.change, format!("{:+.2}", stock.change)),
                    paint_change(stock.change, format!("{:+.2}%", stock.change_percent)),
                    stock.day_low,
                    stock.day_high,
                    stock.market_cap
                ));
            }
            ComparisonItem::Unavailable { ticker, error } => {
                out.push_str(&format!(
                    "{:<8} {}\n",
                    ticker,
                    format!("unavailable: {error}").red()
                ));
            }
        }
    }

    out
}

fn format_stock(stock: &StockSnapshot) -> String {
    let change = paint_change(
        stock.change,
        format!("{:+.2} ({:+.2}%)", stock.change, stock.change_percent),
    );
    format!(
        "Stock ({}): {:.2} {} {}\n  Day range {:.2} – {:.2}   Market cap {}\n",
        stock.ticker.bold(),
        stock.price,
        stock.currency,
        change,
        stock.day_low,
        stock.day_high,
        stock.market_cap
    )
}

fn paint_overall(sentiment: OverallSentiment) -> String {
    let label = sentiment.to_string();
    match sentiment {
        OverallSentiment::Positive => label.green().to_string(),
        OverallSentiment::Negative => label.red().to_string(),
        OverallSentiment::Mixed => label.yellow().to_string(),
        OverallSentiment::Neutral => label.normal().to_string(),
    }
}

fn paint_sentiment(sentiment: Sentiment) -> String {
    let label = sentiment.to_string();
    match sentiment {
        Sentiment::Positive => label.green().to_string(),
        Sentiment::Negative => label.red().to_string(),
        Sentiment::Neutral => label.normal().to_string(),
    }
}

fn paint_change(change: f64, label: String) -> String {
    if change >= 0.0 {
        label.green().to_string()
    } else {
        label.red().to_string()
    }
}
