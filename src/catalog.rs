// catalog.rs
//! Fixed company list and the profile shown for each ticker.
//!
//! Everything here lives in `static` memory and has no write path; the
//! dashboard selects profiles, it never builds or edits them.

use crate::gauge::Factor;
use crate::help::FaqItem;
use crate::metrics_table::MetricRow;
use crate::news::{NewsCategory, NewsItem, Sentiment};
use crate::risk::{Risk, Severity};
use crate::series::SeriesSeed;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Company {
    pub name: &'static str,
    pub ticker: &'static str,
    pub sector: &'static str,
    pub market_cap: &'static str,
}

impl Company {
    /// Text shown in the search box once a company is selected.
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.ticker)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overview {
    pub summary: &'static str,
    pub headquarters: &'static str,
    pub market_size: &'static str,
    pub growth: &'static str,
    pub advantages: &'static [&'static str],
}

/// Margin and leverage figures, margins in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ratios {
    pub gross_margin: f64,
    pub operating_margin: f64,
    pub net_margin: f64,
    pub debt_equity: f64,
    pub roe: f64,
}

#[derive(Debug, PartialEq)]
pub struct CompanyProfile {
    pub company: Company,
    pub series_seed: SeriesSeed,
    pub overview: Overview,
    pub revenue_labels: &'static [&'static str],
    /// Yearly revenue in ₹ crore, aligned with `revenue_labels`.
    pub revenue: &'static [f64],
    pub ratios: Ratios,
    /// Static multibagger score out of 100.
    pub gauge_score: u8,
    pub factors: &'static [Factor],
    pub news: &'static [NewsItem],
    pub risks: &'static [Risk],
    pub metrics_table: &'static [MetricRow],
    pub faqs: &'static [FaqItem],
}

const fn row(
    year: &'static str,
    revenue: f64,
    profit_margin: f64,
    roe: f64,
    debt_equity: f64,
    market_share: f64,
) -> MetricRow {
    MetricRow {
        year,
        revenue,
        profit_margin,
        roe,
        debt_equity,
        market_share,
    }
}

pub fn profiles() -> &'static [CompanyProfile] {
    &PROFILES
}

pub fn companies() -> impl ExactSizeIterator<Item = &'static Company> {
    PROFILES.iter().map(|p| &p.company)
}

pub fn find(ticker: &str) -> Option<&'static CompanyProfile> {
    PROFILES.iter().find(|p| p.company.ticker == ticker)
}

/// The profile shown on first launch.
pub fn default_profile() -> &'static CompanyProfile {
    &PROFILES[0]
}

static PROFILES: [CompanyProfile; 5] = [
    CompanyProfile {
        company: Company {
            name: "Reliance Industries",
            ticker: "RELIANCE",
            sector: "Conglomerate",
            market_cap: "₹19.2T",
        },
        series_seed: SeriesSeed {
            seed: 11,
            drift: 0.015,
        },
        overview: Overview {
            summary: "Reliance is reaccelerating in digital services and new energy platforms, reinvesting cash flows from energy and retail flywheel.",
            headquarters: "Mumbai, India",
            market_size: "Addressable market > ₹25T across telecom, retail, and energy transition verticals.",
            growth: "YoY revenue CAGR 13.4% | EBITDA CAGR 16.1% (FY19-FY24).",
            advantages: &[
                "Integrated ecosystem spanning connectivity, commerce, and energy.",
                "Scale-driven cost advantages and preferred supplier status.",
                "Management execution pedigree with disciplined capital allocation.",
            ],
        },
        revenue_labels: &["FY17", "FY18", "FY19", "FY20", "FY21", "FY22", "FY23", "FY24"],
        revenue: &[330000.0, 360000.0, 410000.0, 450000.0, 482000.0, 615000.0, 696000.0, 742000.0],
        ratios: Ratios {
            gross_margin: 49.0,
            operating_margin: 22.0,
            net_margin: 14.0,
            debt_equity: 0.58,
            roe: 15.8,
        },
        gauge_score: 82,
        factors: &[
            Factor {
                name: "Market Size",
                weight: 40,
                description: "India's retail and digital economy expansion plus renewable energy adjacency offers multi-decade runway.",
                score: 9,
            },
            Factor {
                name: "Competitive Advantage",
                weight: 35,
                description: "Supply chain leverage, proprietary distribution, and cross-selling reinforce structural moat advantages.",
                score: 8,
            },
            Factor {
                name: "Management Quality",
                weight: 25,
                description: "Capital discipline post deleveraging and technology partnerships underline resilient governance.",
                score: 8,
            },
        ],
        news: &[
            NewsItem {
                id: "RELIANCE-1",
                title: "Jio Platforms reports record subscriber additions in tier-2 cities",
                summary: "Digital segment revenue surges 18% YoY supported by 5G monetisation and premium ARPU expansion.",
                sentiment: Sentiment::Positive,
                source: "The Economic Times",
                time: "2024-09-12T07:30",
                category: NewsCategory::News,
            },
            NewsItem {
                id: "RELIANCE-2",
                title: "Market sentiment tilts positive on energy transition thrust",
                summary: "Analysts flag hydrogen electrolyser commissioning as a catalyst for multiple expansion over the next 12 months.",
                sentiment: Sentiment::Positive,
                source: "Bloomberg Quint",
                time: "2024-09-11T13:15",
                category: NewsCategory::Sentiment,
            },
            NewsItem {
                id: "RELIANCE-3",
                title: "Reliance Retail files DRHP for logistics subsidiary",
                summary: "Proposed demerger to unlock omni-channel fulfilment platform with estimated valuation of ₹65,000 crore.",
                sentiment: Sentiment::Neutral,
                source: "SEBI Filings",
                time: "2024-09-10T19:45",
                category: NewsCategory::Filing,
            },
            NewsItem {
                id: "RELIANCE-4",
                title: "OPEC+ production cuts prompt refining margin vigilance",
                summary: "Short-term volatility expected in energy cash flows; hedging policy keeps earnings guidance unchanged.",
                sentiment: Sentiment::Negative,
                source: "Mint",
                time: "2024-09-09T08:10",
                category: NewsCategory::News,
            },
        ],
        risks: &[
            Risk {
                id: "reliance-risk-1",
                title: "Refining margin compression",
                severity: Severity::Medium,
                description: "Geopolitical supply shifts or windfall taxes may suppress near-term downstream profitability.",
                mitigation: "Diversified cash flow mix and hedging discipline cushion near-term shocks.",
            },
            Risk {
                id: "reliance-risk-2",
                title: "Regulatory oversight of data dominance",
                severity: Severity::High,
                description: "Expansion of digital platforms could attract antitrust scrutiny impacting bundling economics.",
                mitigation: "Adjust product packaging to align with Digital India framework and maintain compliance dialogue.",
            },
            Risk {
                id: "reliance-risk-3",
                title: "Execution bandwidth across verticals",
                severity: Severity::Medium,
                description: "Simultaneous scale-up in energy, telecom, and retail increases complexity for leadership bandwidth.",
                mitigation: "Segment-specific CEOs and partner-led build-operate models provide operational depth.",
            },
        ],
        metrics_table: &[
            row("FY19", 410000.0, 9.8, 13.5, 0.82, 24.2),
            row("FY20", 450000.0, 9.6, 13.8, 0.74, 25.8),
            row("FY21", 482000.0, 10.2, 14.1, 0.66, 27.4),
            row("FY22", 615000.0, 11.5, 15.2, 0.62, 28.1),
            row("FY23", 696000.0, 12.8, 15.6, 0.59, 29.6),
            row("FY24", 742000.0, 13.4, 15.8, 0.58, 30.4),
        ],
        faqs: &[
            FaqItem {
                id: "reliance-faq-1",
                question: "How is the multibagger score computed for Reliance?",
                answer: "Score blends 40% quantitative growth momentum, 35% moat durability, and 25% governance signals derived from AI-based transcript analytics.",
            },
            FaqItem {
                id: "reliance-faq-2",
                question: "Which data sources underpin cash flow projections?",
                answer: "Consensus data from Bloomberg, SEBI filings, and alternative data feeds (footfall, digital subscriptions) feed the forecasting engine daily.",
            },
            FaqItem {
                id: "reliance-faq-3",
                question: "How frequently are energy spreads updated?",
                answer: "Refining spreads ingest ICE data intraday, normalised every 30 minutes for scenario stress-testing.",
            },
        ],
    },
    CompanyProfile {
        company: Company {
            name: "Tata Consultancy Services",
            ticker: "TCS",
            sector: "IT Services",
            market_cap: "₹14.5T",
        },
        series_seed: SeriesSeed {
            seed: 21,
            drift: 0.012,
        },
        overview: Overview {
            summary: "TCS sustains best-in-class digital transformation pipeline, anchored by BFSI and cloud modernisation spend.",
            headquarters: "Mumbai, India",
            market_size: "Global IT services TAM estimated at $1.2T with double-digit India offshore expansion.",
            growth: "YoY revenue CAGR 9.7% | EPS CAGR 12.3% (FY18-FY24).",
            advantages: &[
                "Deep client wallet share across mission critical workloads.",
                "Scaled talent supply chain with industry-leading utilisation.",
                "High free cash conversion enabling attractive shareholder payouts.",
            ],
        },
        revenue_labels: &["FY17", "FY18", "FY19", "FY20", "FY21", "FY22", "FY23", "FY24"],
        revenue: &[118000.0, 123000.0, 146000.0, 156000.0, 164000.0, 191000.0, 220000.0, 241000.0],
        ratios: Ratios {
            gross_margin: 53.0,
            operating_margin: 26.0,
            net_margin: 21.0,
            debt_equity: 0.18,
            roe: 24.5,
        },
        gauge_score: 88,
        factors: &[
            Factor {
                name: "Market Size",
                weight: 35,
                description: "Secular cloud migration and AI integration sustain multi-year digitisation budgets in core markets.",
                score: 8,
            },
            Factor {
                name: "Competitive Advantage",
                weight: 40,
                description: "Sticky client relationships and high switching costs deliver superior wallet share retention.",
                score: 9,
            },
            Factor {
                name: "Management Quality",
                weight: 25,
                description: "Stable leadership succession and disciplined margin management underpin governance alpha.",
                score: 9,
            },
        ],
        news: &[
            NewsItem {
                id: "TCS-1",
                title: "TCS wins ₹8,200 crore AI transformation mandate from global bank",
                summary: "Deal spans risk analytics, compliance automation, and hyperscaler migration over five-year horizon.",
                sentiment: Sentiment::Positive,
                source: "CNBC-TV18",
                time: "2024-09-12T09:05",
                category: NewsCategory::News,
            },
            NewsItem {
                id: "TCS-2",
                title: "Employee retention improves with reskilling incentives",
                summary: "Quarterly attrition drops to 14%, easing wage pressure and supporting margin recovery.",
                sentiment: Sentiment::Positive,
                source: "Business Standard",
                time: "2024-09-11T18:22",
                category: NewsCategory::Sentiment,
            },
            NewsItem {
                id: "TCS-3",
                title: "SEBI filing: Shareholders approve share buyback worth ₹18,000 crore",
                summary: "Buyback to be executed via tender route, reflecting management conviction in cash flow visibility.",
                sentiment: Sentiment::Neutral,
                source: "SEBI Filings",
                time: "2024-09-09T20:30",
                category: NewsCategory::Filing,
            },
            NewsItem {
                id: "TCS-4",
                title: "US tech spending guidance turns cautious for H1 FY25",
                summary: "Short-term demand moderation expected in discretionary verticals; pipeline conversion intact.",
                sentiment: Sentiment::Negative,
                source: "Wall Street Journal",
                time: "2024-09-08T06:55",
                category: NewsCategory::News,
            },
        ],
        risks: &[
            Risk {
                id: "tcs-risk-1",
                title: "Global tech spending slowdown",
                severity: Severity::Medium,
                description: "Macro uncertainty may defer decision cycles for large transformational deals, compressing near-term revenue growth.",
                mitigation: "Large annuity base and vendor consolidation tailwinds maintain long-term growth resilience.",
            },
            Risk {
                id: "tcs-risk-2",
                title: "Talent cost inflation",
                severity: Severity::Medium,
                description: "Sustained wage inflation or visa regime changes could pressure operating margins.",
                mitigation: "Automation-driven productivity and offshore mix shifts offset wage escalation.",
            },
            Risk {
                id: "tcs-risk-3",
                title: "Regulatory changes in key geographies",
                severity: Severity::High,
                description: "Data localisation mandates or visa quota revisions can elevate compliance costs.",
                mitigation: "Distributed delivery network and compliance-first architecture minimise disruption.",
            },
        ],
        metrics_table: &[
            row("FY19", 146000.0, 20.6, 29.4, 0.23, 8.4),
            row("FY20", 156000.0, 20.2, 27.3, 0.21, 8.7),
            row("FY21", 164000.0, 20.6, 26.2, 0.2, 9.1),
            row("FY22", 191000.0, 21.5, 24.6, 0.18, 9.6),
            row("FY23", 220000.0, 22.2, 24.1, 0.18, 10.1),
            row("FY24", 241000.0, 22.8, 24.5, 0.17, 10.5),
        ],
        faqs: &[
            FaqItem {
                id: "tcs-faq-1",
                question: "How does the platform treat large-deal announcements?",
                answer: "Natural language pipelines parse client commentary, flag deal certainty, and attribute to 12-month backlog uplift.",
            },
            FaqItem {
                id: "tcs-faq-2",
                question: "What assumptions drive TCS margin forecasts?",
                answer: "Margin models incorporate utilisation buffers, onsite-offshore mix, and wage hikes benchmarked to NASSCOM datasets.",
            },
            FaqItem {
                id: "tcs-faq-3",
                question: "Does the score factor in GenAI adoption?",
                answer: "Yes, platform adoption speed and cross-selling ratios feed into competitive moat scoring.",
            },
        ],
    },
    CompanyProfile {
        company: Company {
            name: "HDFC Bank",
            ticker: "HDFCBANK",
            sector: "Banking",
            market_cap: "₹11.2T",
        },
        series_seed: SeriesSeed {
            seed: 31,
            drift: 0.01,
        },
        overview: Overview {
            summary: "HDFC Bank leverages post-merger scale to deepen retail credit penetration while maintaining pristine asset quality.",
            headquarters: "Mumbai, India",
            market_size: "Indian credit market expected to double by FY30 with rising financialisation and infra lending.",
            growth: "Loan book CAGR 17% | Deposit CAGR 18% (FY19-FY24).",
            advantages: &[
                "Best-in-class CASA franchise lowers cost of funds.",
                "Advanced risk analytics ensures industry-leading asset quality.",
                "Cross-sell synergies from housing finance merger.",
            ],
        },
        revenue_labels: &["FY17", "FY18", "FY19", "FY20", "FY21", "FY22", "FY23", "FY24"],
        revenue: &[77500.0, 89500.0, 112000.0, 125000.0, 135000.0, 157000.0, 181000.0, 212000.0],
        ratios: Ratios {
            gross_margin: 37.0,
            operating_margin: 24.0,
            net_margin: 19.0,
            debt_equity: 0.12,
            roe: 17.8,
        },
        gauge_score: 79,
        factors: &[
            Factor {
                name: "Market Size",
                weight: 35,
                description: "India's credit penetration remains under 60% of GDP unlocking multi-year loan growth opportunity.",
                score: 8,
            },
            Factor {
                name: "Competitive Advantage",
                weight: 35,
                description: "Industry-leading underwriting and digital origination reduce credit costs and boost cross-sell.",
                score: 8,
            },
            Factor {
                name: "Management Quality",
                weight: 30,
                description: "Seasoned leadership team with conservative provisioning and stable succession bench.",
                score: 7,
            },
        ],
        news: &[
            NewsItem {
                id: "HDFC-1",
                title: "HDFC Bank posts record retail disbursements post merger integration",
                summary: "Consumer finance and SME segments grew 26% YoY aided by unified data lake and co-lending alliances.",
                sentiment: Sentiment::Positive,
                source: "Financial Express",
                time: "2024-09-10T10:30",
                category: NewsCategory::News,
            },
            NewsItem {
                id: "HDFC-2",
                title: "Market sentiment cautious on LCR tightening commentary",
                summary: "RBI draft norms may require incremental liquidity buffers; bank indicates adequate capital cushions.",
                sentiment: Sentiment::Neutral,
                source: "Bloomberg",
                time: "2024-09-09T15:20",
                category: NewsCategory::Sentiment,
            },
            NewsItem {
                id: "HDFC-3",
                title: "SEBI filing: Board approves ₹12,000 crore infrastructure bond issuance",
                summary: "Long-tenor issuance to fund project finance opportunities under India infrastructure pipeline.",
                sentiment: Sentiment::Neutral,
                source: "SEBI Filings",
                time: "2024-09-08T21:40",
                category: NewsCategory::Filing,
            },
            NewsItem {
                id: "HDFC-4",
                title: "Management warns on elevated slippages in unsecured book",
                summary: "Credit card and microfinance segments witness uptick in stress; provisions raised proactively.",
                sentiment: Sentiment::Negative,
                source: "Livemint",
                time: "2024-09-07T07:05",
                category: NewsCategory::News,
            },
        ],
        risks: &[
            Risk {
                id: "hdfc-risk-1",
                title: "Regulatory tightening",
                severity: Severity::High,
                description: "RBI may tighten capital or liquidity norms post-merger, impacting return ratios.",
                mitigation: "Bank operates with buffers above regulatory minima and engages proactively with regulators.",
            },
            Risk {
                id: "hdfc-risk-2",
                title: "Integration complexity",
                severity: Severity::Medium,
                description: "Large-scale systems integration could elevate operating costs or cause customer friction.",
                mitigation: "Phased rollout and digital migration roadmap reduces disruption risk.",
            },
            Risk {
                id: "hdfc-risk-3",
                title: "Unsecured credit cycle turn",
                severity: Severity::Medium,
                description: "Rapid growth in unsecured lending might drive higher credit costs if macros deteriorate.",
                mitigation: "Dynamic provisioning models and data-driven underwriting monitor credit quality in real time.",
            },
        ],
        metrics_table: &[
            row("FY19", 112000.0, 18.2, 16.4, 0.14, 6.8),
            row("FY20", 125000.0, 18.5, 16.9, 0.13, 7.2),
            row("FY21", 135000.0, 18.8, 16.3, 0.13, 7.6),
            row("FY22", 157000.0, 19.4, 17.2, 0.12, 8.1),
            row("FY23", 181000.0, 19.8, 17.6, 0.12, 8.7),
            row("FY24", 212000.0, 20.4, 17.8, 0.11, 9.4),
        ],
        faqs: &[
            FaqItem {
                id: "hdfc-faq-1",
                question: "How does the model treat Net Interest Margin guidance?",
                answer: "Forward NIM curves incorporate RBI policy path scenarios and re-pricing lags across retail and wholesale portfolios.",
            },
            FaqItem {
                id: "hdfc-faq-2",
                question: "Can I customise risk triggers specific to banking KPIs?",
                answer: "Yes, create alert rules on GNPA, slippage ratio, CASA mix, and capital ratios and receive automated nudges.",
            },
            FaqItem {
                id: "hdfc-faq-3",
                question: "What alternative data feeds are analysed?",
                answer: "Credit bureau momentum, card spend indices, and digital adoption signals feed sentiment layers.",
            },
        ],
    },
    CompanyProfile {
        company: Company {
            name: "Avenue Supermarts",
            ticker: "DMART",
            sector: "Retail",
            market_cap: "₹3.2T",
        },
        series_seed: SeriesSeed {
            seed: 41,
            drift: 0.018,
        },
        overview: Overview {
            summary: "Avenue Supermarts continues to scale its efficiency-led modern retail format, achieving best-in-class inventory turns.",
            headquarters: "Mumbai, India",
            market_size: "Organised retail penetration to double this decade with urbanisation and rising disposable incomes.",
            growth: "Revenue CAGR 24% | EBITDA CAGR 20% (FY19-FY24).",
            advantages: &[
                "Tight cost control and private label penetration support superior margins.",
                "Cluster-based expansion ensures supply chain efficiency.",
                "Working capital flywheel funds store rollouts without leverage.",
            ],
        },
        revenue_labels: &["FY17", "FY18", "FY19", "FY20", "FY21", "FY22", "FY23", "FY24"],
        revenue: &[12400.0, 15030.0, 19000.0, 24000.0, 30000.0, 42900.0, 52500.0, 61000.0],
        ratios: Ratios {
            gross_margin: 39.0,
            operating_margin: 18.0,
            net_margin: 10.5,
            debt_equity: 0.08,
            roe: 18.4,
        },
        gauge_score: 91,
        factors: &[
            Factor {
                name: "Market Size",
                weight: 30,
                description: "Tier-2 and tier-3 penetration combined with omni-channel adjacency expands revenue runway.",
                score: 8,
            },
            Factor {
                name: "Competitive Advantage",
                weight: 45,
                description: "Superior supply chain efficiency and everyday low price positioning create sticky customer loyalty.",
                score: 9,
            },
            Factor {
                name: "Management Quality",
                weight: 25,
                description: "Prudent expansion cadence and disciplined cost culture entrenched by founding team leadership.",
                score: 9,
            },
        ],
        news: &[
            NewsItem {
                id: "DMART-1",
                title: "DMart launches dark stores to supercharge online fulfilment",
                summary: "Pilot in Bengaluru reduces delivery times to under 3 hours, boosting digital revenue mix to 11%.",
                sentiment: Sentiment::Positive,
                source: "ET Retail",
                time: "2024-09-12T11:00",
                category: NewsCategory::News,
            },
            NewsItem {
                id: "DMART-2",
                title: "Sentiment neutral after gross margin commentary",
                summary: "Management guides for modest margin compression due to promotional intensity in new markets.",
                sentiment: Sentiment::Neutral,
                source: "CNBC Awaaz",
                time: "2024-09-11T14:45",
                category: NewsCategory::Sentiment,
            },
            NewsItem {
                id: "DMART-3",
                title: "Regulatory filing: New distribution centre commissioned in Gujarat",
                summary: "Facility to optimise logistics for western cluster; capex of ₹480 crore funded via internal accruals.",
                sentiment: Sentiment::Positive,
                source: "SEBI Filings",
                time: "2024-09-10T16:10",
                category: NewsCategory::Filing,
            },
            NewsItem {
                id: "DMART-4",
                title: "Competition heats up in premium groceries",
                summary: "Global players expanding footprint; may require incremental marketing spends to defend share.",
                sentiment: Sentiment::Negative,
                source: "Reuters",
                time: "2024-09-09T09:35",
                category: NewsCategory::News,
            },
        ],
        risks: &[
            Risk {
                id: "dmart-risk-1",
                title: "Competitive price pressure",
                severity: Severity::Medium,
                description: "Aggressive discounts from e-commerce players could narrow pricing edge and pressures margins.",
                mitigation: "Maintain private label mix and deepen supplier relationships to sustain unit economics.",
            },
            Risk {
                id: "dmart-risk-2",
                title: "Regulatory scrutiny on grocery sourcing",
                severity: Severity::Medium,
                description: "Changes to food sourcing norms may require supply chain reconfiguration.",
                mitigation: "Proactive compliance monitoring and diversified sourcing relationships.",
            },
            Risk {
                id: "dmart-risk-3",
                title: "Execution risk in dark-store rollout",
                severity: Severity::High,
                description: "Rapid online fulfilment expansion might strain logistics and service levels.",
                mitigation: "Phased city-level rollout with robust analytics on delivery economics.",
            },
        ],
        metrics_table: &[
            row("FY19", 19000.0, 5.5, 15.9, 0.12, 1.9),
            row("FY20", 24000.0, 6.1, 16.4, 0.1, 2.2),
            row("FY21", 30000.0, 7.2, 16.8, 0.09, 2.4),
            row("FY22", 42900.0, 8.3, 17.6, 0.09, 2.8),
            row("FY23", 52500.0, 8.9, 18.1, 0.08, 3.2),
            row("FY24", 61000.0, 9.4, 18.4, 0.08, 3.6),
        ],
        faqs: &[
            FaqItem {
                id: "dmart-faq-1",
                question: "Does the platform track store productivity metrics?",
                answer: "Yes, store throughput, same store sales, rental efficiencies, and e-commerce penetration feed into growth scoring.",
            },
            FaqItem {
                id: "dmart-faq-2",
                question: "How are inventory turns benchmarked?",
                answer: "Inventory analytics ingest MCA disclosures and vendor data to benchmark turns versus FMCG peers quarterly.",
            },
            FaqItem {
                id: "dmart-faq-3",
                question: "Can alerts be set for competitor store launches?",
                answer: "Enable competitive intelligence alerts to receive bulletins on store openings within targeted catchments.",
            },
        ],
    },
    CompanyProfile {
        company: Company {
            name: "Divi's Laboratories",
            ticker: "DIVISLAB",
            sector: "Pharmaceuticals",
            market_cap: "₹1.2T",
        },
        series_seed: SeriesSeed {
            seed: 51,
            drift: 0.013,
        },
        overview: Overview {
            summary: "Divi's Labs scales specialised APIs and custom synthesis leadership, riding on China+1 outsourcing tailwinds.",
            headquarters: "Hyderabad, India",
            market_size: "Global specialty pharma outsourcing is projected to grow at >11% CAGR through 2030.",
            growth: "Revenue CAGR 17% | PAT CAGR 19% (FY19-FY24).",
            advantages: &[
                "High entry barriers in complex chemistry and regulatory compliance.",
                "Sticky client relationships with top global innovators.",
                "Healthy balance sheet and consistent double-digit ROCE.",
            ],
        },
        revenue_labels: &["FY17", "FY18", "FY19", "FY20", "FY21", "FY22", "FY23", "FY24"],
        revenue: &[4100.0, 4500.0, 5300.0, 5500.0, 6900.0, 8800.0, 9100.0, 9700.0],
        ratios: Ratios {
            gross_margin: 57.0,
            operating_margin: 31.0,
            net_margin: 24.0,
            debt_equity: 0.02,
            roe: 20.7,
        },
        gauge_score: 86,
        factors: &[
            Factor {
                name: "Market Size",
                weight: 30,
                description: "Global pharma outsourcing spend accelerates as innovators rebalance supply chains.",
                score: 7,
            },
            Factor {
                name: "Competitive Advantage",
                weight: 40,
                description: "Regulatory track record, molecule complexity expertise, and cost optimised manufacturing underpin moat.",
                score: 9,
            },
            Factor {
                name: "Management Quality",
                weight: 30,
                description: "Founder-led leadership with conservative leverage profile and high R&D reinvestment.",
                score: 9,
            },
        ],
        news: &[
            NewsItem {
                id: "DIVIS-1",
                title: "Divi's secures multi-year supply contract for blockbuster oncology API",
                summary: "Contract adds $120 million annualised revenue with margin accretive chemistry portfolio.",
                sentiment: Sentiment::Positive,
                source: "PharmaWire",
                time: "2024-09-12T08:40",
                category: NewsCategory::News,
            },
            NewsItem {
                id: "DIVIS-2",
                title: "Sentiment positive on sodium API export approvals",
                summary: "USFDA approval lifts utilisation outlook; brokerage upgrades FY25 EPS estimates by 7%.",
                sentiment: Sentiment::Positive,
                source: "Moneycontrol",
                time: "2024-09-11T17:30",
                category: NewsCategory::Sentiment,
            },
            NewsItem {
                id: "DIVIS-3",
                title: "Regulatory filing: Capex of ₹1,200 crore for greenfield facility",
                summary: "Plant to expand peptide synthesis capabilities; operations expected by FY27.",
                sentiment: Sentiment::Neutral,
                source: "SEBI Filings",
                time: "2024-09-10T19:10",
                category: NewsCategory::Filing,
            },
            NewsItem {
                id: "DIVIS-4",
                title: "Regulators tighten environmental compliance standards",
                summary: "State board seeks additional disclosures; potential near-term capex for effluent treatment.",
                sentiment: Sentiment::Negative,
                source: "The Hindu BusinessLine",
                time: "2024-09-08T06:45",
                category: NewsCategory::News,
            },
        ],
        risks: &[
            Risk {
                id: "divis-risk-1",
                title: "Regulatory compliance risk",
                severity: Severity::High,
                description: "USFDA observations or environmental audits could delay shipments and increase remediation costs.",
                mitigation: "Dedicated compliance teams and continuous process monitoring keep deviation rates minimal.",
            },
            Risk {
                id: "divis-risk-2",
                title: "Client concentration",
                severity: Severity::Medium,
                description: "High revenue contribution from top 10 clients could amplify impact if orders are deferred.",
                mitigation: "Active diversification across nutraceuticals and speciality generics underway.",
            },
            Risk {
                id: "divis-risk-3",
                title: "Raw material price swings",
                severity: Severity::Medium,
                description: "Volatility in key solvents and intermediates can affect gross margins.",
                mitigation: "Long-term contracts and backward integration projects hedge supply risks.",
            },
        ],
        metrics_table: &[
            row("FY19", 5300.0, 21.5, 19.2, 0.05, 0.9),
            row("FY20", 5500.0, 22.3, 19.6, 0.04, 1.0),
            row("FY21", 6900.0, 23.4, 20.4, 0.03, 1.1),
            row("FY22", 8800.0, 24.6, 20.5, 0.02, 1.3),
            row("FY23", 9100.0, 23.8, 20.6, 0.02, 1.4),
            row("FY24", 9700.0, 24.2, 20.7, 0.02, 1.5),
        ],
        faqs: &[
            FaqItem {
                id: "divis-faq-1",
                question: "How are custom synthesis order books modelled?",
                answer: "Historic win ratios, molecule lifecycle analysis, and innovator pipeline probabilities inform forward revenue.",
            },
            FaqItem {
                id: "divis-faq-2",
                question: "Are ESG metrics factored into risk scoring?",
                answer: "Environmental compliance history and emission footprints adjust the risk premium within the score.",
            },
            FaqItem {
                id: "divis-faq-3",
                question: "What is the assumed capex intensity?",
                answer: "Model assumes 14-16% of revenue in capex for capacity expansion and compliance upgrades through FY27.",
            },
        ],
    },
];
