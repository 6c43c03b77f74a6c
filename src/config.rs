//! Pipeline configuration and the fixed names of the analysis

use std::path::PathBuf;

/// Private credit to GDP
pub const PRIVATE_CREDIT: &str = "GFDD.DI.12";
/// Bank accounts per 1000 adults
pub const BANK_ACCOUNTS: &str = "GFDD.AI.01";
/// Net interest margin
pub const NET_INTEREST_MARGIN: &str = "GFDD.EI.01";
/// Bank z-score (stability)
pub const ZSCORE: &str = "GFDD.SI.01";

pub const YEAR: &str = "Year";
pub const REGION: &str = "Region";

/// Columns clipped at their 5th/95th percentiles
pub const WINSORIZED_COLUMNS: [&str; 3] = [PRIVATE_CREDIT, BANK_ACCOUNTS, NET_INTEREST_MARGIN];

/// Indicator columns in the overall summary
pub const INDICATORS: [&str; 4] = [PRIVATE_CREDIT, BANK_ACCOUNTS, NET_INTEREST_MARGIN, ZSCORE];

/// Last pre-crisis year; 2008 itself is a buffer year in neither subset
pub const PRE_CRISIS_MAX_YEAR: i32 = 2007;
/// First post-crisis year
pub const POST_CRISIS_MIN_YEAR: i32 = 2009;

pub const SCATTER_FILENAME: &str = "scatter_privatecredit_vs_zscore.png";
pub const LINE_FILENAME: &str = "line_trend_zscore.png";
pub const BOXPLOT_FILENAME: &str = "boxplot_zscore.png";
pub const OUTPUT_FILENAME: &str = "Financial_Development_Analysis_June2016.xlsx";

pub const SHEET_CLEAN: &str = "Clean Data";
pub const SHEET_OVERALL: &str = "Descriptive Stats Overall";
pub const SHEET_PRE: &str = "Pre-Crisis ZScore Stats";
pub const SHEET_POST: &str = "Post-Crisis ZScore Stats";
pub const SHEET_PIVOT: &str = "Pivot: PrivateCredit by Region";
pub const SHEET_SCATTER: &str = "Scatter Plot";
pub const SHEET_LINE: &str = "Line Chart";
pub const SHEET_BOXPLOT: &str = "Boxplot ZScore";

/// Where the analysis reads from and writes to
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Input workbook path
    pub input_path: PathBuf,
    /// Worksheet holding the observations
    pub sheet_name: String,
    /// Directory the charts and the report workbook are written into
    pub out_dir: PathBuf,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("GlobalFinancialDevelopmentDatabaseJune2017.xlsx"),
            sheet_name: "Data - June 2016".to_string(),
            out_dir: PathBuf::from("."),
        }
    }
}

impl AnalysisConfig {
    pub fn scatter_path(&self) -> PathBuf {
        self.out_dir.join(SCATTER_FILENAME)
    }

    pub fn line_path(&self) -> PathBuf {
        self.out_dir.join(LINE_FILENAME)
    }

    pub fn boxplot_path(&self) -> PathBuf {
        self.out_dir.join(BOXPLOT_FILENAME)
    }

    pub fn output_path(&self) -> PathBuf {
        self.out_dir.join(OUTPUT_FILENAME)
    }
}
