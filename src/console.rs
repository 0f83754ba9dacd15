//! Interactive menu loop.

use std::io::Write;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines};
use tracing::{error, warn};

use crate::error::Result;
use crate::preferences::UserPreferences;
use crate::services::analyzer::CryptoAnalyzer;
use crate::services::reporting::print_analysis_summary;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    ConfigurePreferences,
    AnalyzeBtc,
    AnalyzeEth,
    AnalyzeCustom,
    ViewHistory,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::ConfigurePreferences),
            "2" => Some(MenuChoice::AnalyzeBtc),
            "3" => Some(MenuChoice::AnalyzeEth),
            "4" => Some(MenuChoice::AnalyzeCustom),
            "5" => Some(MenuChoice::ViewHistory),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

pub struct Console<R> {
    lines: Lines<BufReader<R>>,
    analyzer: CryptoAnalyzer,
    preferences: UserPreferences,
}

impl<R: AsyncRead + Unpin> Console<R> {
    pub fn new(input: R, analyzer: CryptoAnalyzer) -> Self {
        Self {
            lines: BufReader::new(input).lines(),
            analyzer,
            preferences: UserPreferences::default(),
        }
    }

    pub fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    /// Run until the user exits or input ends.
    pub async fn run(&mut self) -> Result<()> {
        if !self.configure_preferences().await? {
            return Ok(());
        }
        println!("\nDefault preferences configured!");

        loop {
            println!("\n=== Crypto Analyzer Console ===");
            println!("1. Configure Preferences");
            println!("2. Analyze BTC");
            println!("3. Analyze ETH");
            println!("4. Analyze Custom Token");
            println!("5. View Historical Analysis");
            println!("6. Exit");

            let Some(input) = self.prompt("\nEnter your choice (1-6): ").await? else {
                return Ok(());
            };

            let symbol = match MenuChoice::parse(&input) {
                Some(MenuChoice::Exit) => return Ok(()),
                Some(MenuChoice::ConfigurePreferences) => {
                    if !self.configure_preferences().await? {
                        return Ok(());
                    }
                    println!("\nPreferences updated successfully!");
                    continue;
                }
                Some(MenuChoice::ViewHistory) => {
                    let Some(symbol) = self.prompt("Enter token symbol to view history: ").await? else {
                        return Ok(());
                    };
                    self.show_history(&symbol).await;
                    continue;
                }
                Some(MenuChoice::AnalyzeBtc) => "BTC".to_string(),
                Some(MenuChoice::AnalyzeEth) => "ETH".to_string(),
                Some(MenuChoice::AnalyzeCustom) => {
                    match self.prompt("Enter token symbol (e.g., BTC, ETH): ").await? {
                        Some(symbol) => symbol,
                        None => return Ok(()),
                    }
                }
                None => {
                    println!("Invalid choice.");
                    continue;
                }
            };

            println!("\nStarting analysis for {}...", symbol.trim());
            match self.analyzer.analyze(&symbol, &self.preferences).await {
                Ok(analysis) => {
                    print_analysis_summary(&analysis);
                    if self.prompt("\nPress Enter to continue...").await?.is_none() {
                        return Ok(());
                    }
                }
                Err(e) => {
                    error!("❌ Analysis failed: {}", e);
                    println!("Analysis failed: {}", e);
                }
            }
        }
    }

    async fn show_history(&self, symbol: &str) {
        match self.analyzer.history(symbol).await {
            Ok(Some(analysis)) => print_analysis_summary(&analysis),
            Ok(None) => println!("No historical analysis for {} in this session.", symbol.trim()),
            Err(e) => {
                warn!("⚠️ Stored analysis for {} could not be read: {}", symbol, e);
                println!("Stored analysis for {} could not be read.", symbol.trim());
            }
        }
    }

    /// Returns `false` when input ended before all answers were given.
    async fn configure_preferences(&mut self) -> Result<bool> {
        println!("\n=== Configure Analysis Preferences ===");

        let Some(risk) = self.prompt("Risk tolerance (low/medium/high) [medium]: ").await? else {
            return Ok(false);
        };
        println!("\nSelect preferred indicators (comma-separated):");
        println!("Available: RSI, MACD, SMA, Volume, Bollinger");
        let Some(indicators) = self.prompt("[RSI,MACD,SMA]: ").await? else {
            return Ok(false);
        };
        let Some(horizon) = self.prompt("Investment horizon (short/medium/long) [medium]: ").await? else {
            return Ok(false);
        };
        let Some(max_risk) = self.prompt("Maximum risk percentage (0-1) [0.7]: ").await? else {
            return Ok(false);
        };
        let Some(notifications) = self
            .prompt("Notification frequency (real-time/daily/weekly) [real-time]: ")
            .await?
        else {
            return Ok(false);
        };

        let (preferences, rejected) =
            UserPreferences::from_answers(&risk, &indicators, &horizon, &max_risk, &notifications);
        for reason in rejected {
            println!("Ignored: {} (default used)", reason);
        }
        self.preferences = preferences;
        Ok(true)
    }

    async fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        print!("{}", message);
        std::io::stdout().flush()?;
        Ok(self.lines.next_line().await?)
    }
}
