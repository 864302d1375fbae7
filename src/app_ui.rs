// app_ui.rs
use crate::axes;
use crate::axes_util;
use crate::catalog;
use crate::config::Config;
use crate::crosshair::Crosshair;
use crate::dashboard::Dashboard;
use crate::datawindow::CandleWindow;
use crate::drawing_util;
use crate::fundamentals;
use crate::gauge;
use crate::help;
use crate::hlcbars::{self, CandleColors};
use crate::metrics_table::{self, SortKey};
use crate::navigation::SECTIONS;
use crate::news::Sentiment;
use crate::preferences::{self, DigestFrequency, FormAction, Lookback, Plan};
use crate::risk::Severity;
use crate::search::SearchKey;
use crate::settings;
use crate::timeframe::{BucketUnit, Timeframe};
use chrono::{Datelike, Utc};
use eframe::{egui, Frame};

const ACCENT: egui::Color32 = egui::Color32::from_rgb(13, 148, 136);
const AMBER: egui::Color32 = egui::Color32::from_rgb(217, 119, 6);
const ROSE: egui::Color32 = egui::Color32::from_rgb(225, 29, 72);
const EMERALD: egui::Color32 = egui::Color32::from_rgb(5, 150, 105);

pub struct DashboardApp {
    dashboard: Dashboard,
    crosshair: Crosshair,
    show_candles: bool,
    colors: CandleColors,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &Config) -> Self {
        log::info!("creating dashboard window");
        cc.egui_ctx.set_visuals(if config.general.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        Self {
            dashboard: Dashboard::new(config, Utc::now()),
            crosshair: Crosshair::default(),
            show_candles: config.chart.show_candles,
            colors: CandleColors::from_rgb(config.chart.up_color, config.chart.down_color),
        }
    }

    fn select_company(&mut self, ticker: &str) {
        if let Err(e) = self.dashboard.select_company(ticker, Utc::now()) {
            log::warn!("{e}");
        }
        self.crosshair.invalidate();
    }

    fn select_timeframe(&mut self, timeframe: Timeframe) {
        self.dashboard.select_timeframe(timeframe, Utc::now());
        self.crosshair.invalidate();
    }

    fn sidebar(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.label(egui::RichText::new("ASTRAMULTIBAGGER").small().strong().color(ACCENT));
        ui.label(egui::RichText::new("Intelligent India Equities Radar").strong());
        ui.add_space(12.0);

        for section in SECTIONS {
            let active = self.dashboard.navigation.active() == section.id;
            let text = format!("{}  {}", section.icon, section.label);
            if ui.selectable_label(active, text).clicked() {
                self.dashboard.navigation.navigate(section.id);
            }
        }

        ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
            ui.add_space(8.0);
            ui.small(
                "Research outputs are AI-simulated and must be supplemented with independent \
                 diligence. Markets involve risk of capital loss.",
            );
            ui.label(egui::RichText::new("Disclaimer").strong());
        });
    }

    /// Section heading that doubles as the scroll target and visibility probe.
    fn section_heading(
        &mut self,
        ui: &mut egui::Ui,
        id: &'static str,
        title: &str,
        visibility: &mut Vec<(&'static str, bool)>,
    ) {
        let response = ui.heading(title);
        if self.dashboard.navigation.take_scroll_request(id) {
            response.scroll_to_me(Some(egui::Align::TOP));
        }
        visibility.push((id, ui.is_rect_visible(response.rect)));
    }

    fn search_bar(&mut self, ui: &mut egui::Ui) {
        let search = &mut self.dashboard.search;
        let mut query = search.query().to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut query)
                .hint_text("Search Indian companies by name, ticker, or sector")
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            search.set_query(query);
        }
        if response.gained_focus() {
            search.focus();
        }

        let suggestions = search.suggestions(catalog::companies());
        let mut picked = None;

        if response.has_focus() || response.lost_focus() {
            let key = ui.input_mut(|i| {
                [
                    (egui::Key::ArrowDown, SearchKey::ArrowDown),
                    (egui::Key::ArrowUp, SearchKey::ArrowUp),
                    (egui::Key::Enter, SearchKey::Enter),
                    (egui::Key::Escape, SearchKey::Escape),
                ]
                .into_iter()
                .find(|(key, _)| i.consume_key(egui::Modifiers::NONE, *key))
                .map(|(_, key)| key)
            });
            if let Some(key) = key {
                if key != SearchKey::Escape {
                    search.focus();
                    response.request_focus();
                }
                picked = search.handle_key(key, &suggestions).map(|c| c.ticker);
            }
        }

        if search.is_open() {
            let list = egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                if suggestions.is_empty() {
                    ui.weak("No companies match that search.");
                }
                for (i, company) in suggestions.iter().enumerate() {
                    let active = search.active_index() == Some(i);
                    let text = format!(
                        "{}  ·  {}\n{} • Market Cap: {}",
                        company.name, company.ticker, company.sector, company.market_cap
                    );
                    if ui.selectable_label(active, text).clicked() {
                        picked = Some(company.ticker);
                    }
                }
            });
            let clicked_elsewhere = ui.input(|i| i.pointer.any_pressed())
                && !list.response.contains_pointer()
                && !response.contains_pointer();
            if clicked_elsewhere {
                search.close();
            }
        }

        if let Some(ticker) = picked {
            self.select_company(ticker);
        }
    }

    fn overview(&mut self, ui: &mut egui::Ui) {
        let profile = self.dashboard.profile();
        let company = &profile.company;

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal_top(|ui| {
                ui.vertical(|ui| {
                    ui.set_max_width((ui.available_width() - 180.0).max(200.0));
                    ui.label(egui::RichText::new("MULTIBAGGER LENS").small().strong().color(ACCENT));
                    ui.label(
                        egui::RichText::new(company.display_name())
                            .size(22.0)
                            .strong(),
                    );
                    ui.label(profile.overview.summary);
                    ui.add_space(6.0);
                    ui.columns(3, |cols| {
                        stat(&mut cols[0], "Sector", company.sector);
                        stat(&mut cols[1], "Market Cap", company.market_cap);
                        stat(&mut cols[2], "Growth Snapshot", profile.overview.growth);
                    });
                    ui.add_space(6.0);
                    ui.label(egui::RichText::new("Market opportunity").strong());
                    ui.label(profile.overview.market_size);
                    ui.small(format!("Headquarters: {}", profile.overview.headquarters));
                    for advantage in profile.overview.advantages {
                        ui.label(format!("• {advantage}"));
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    if gauge_dial(ui, profile.gauge_score).clicked() {
                        self.dashboard.gauge.open();
                    }
                });
            });
        });
    }

    fn gauge_window(&mut self, ctx: &egui::Context) {
        let profile = self.dashboard.profile();
        let mut open = self.dashboard.gauge.is_open();
        let mut close_clicked = false;

        egui::Window::new("Multibagger Potential Breakdown")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.weak(
                    "Weighted assessment across qualitative and quantitative factors. \
                     Hover to learn how each element contributes.",
                );
                ui.add_space(6.0);
                for factor in profile.factors {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                ui.strong(factor.name);
                                ui.small(factor.weight_label());
                            });
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                ui.label(egui::RichText::new(factor.score_label()).strong().color(ACCENT));
                            });
                        });
                        ui.label(factor.description).on_hover_text(factor.description);
                    });
                }
                ui.add_space(4.0);
                if ui.button("Close").clicked() {
                    close_clicked = true;
                }
            });

        if !open || close_clicked {
            self.dashboard.gauge.close();
        }
    }

    fn analytics(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.weak("Pan, zoom, and slice multi-horizon charts to interrogate price action and fundamentals.");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut timeframe = self.dashboard.timeframe();
                egui::ComboBox::from_id_salt("timeframe")
                    .selected_text(timeframe.label())
                    .show_ui(ui, |ui| {
                        for option in Timeframe::ALL {
                            ui.selectable_value(&mut timeframe, option, option.label());
                        }
                    });
                ui.label("Timeframe");
                if timeframe != self.dashboard.timeframe() {
                    self.select_timeframe(timeframe);
                }
                if ui.button(if self.show_candles { "bars" } else { "candles" }).clicked() {
                    self.show_candles = !self.show_candles;
                }
                if ui.button("Reset view").clicked() {
                    self.dashboard.reset_views();
                }
            });
        });

        ui.add_space(6.0);
        ui.strong("OHLC Price Action");
        let unit = self.dashboard.timeframe().policy().bucket_unit;
        candle_chart(
            ui,
            &mut self.dashboard.candles,
            &mut self.crosshair,
            unit,
            self.show_candles,
            self.colors,
        );
        ui.small("Scroll to zoom, drag to pan. Double-click a chart to reset its view. Prices simulated for demonstration.");

        ui.add_space(10.0);
        ui.columns(2, |cols| {
            cols[0].strong("Revenue growth YoY (₹ Crore)");
            let response = fundamentals::draw_revenue(
                &mut cols[0],
                &self.dashboard.revenue,
                &mut self.dashboard.revenue_view,
                settings::SMALL_CHART_HEIGHT,
            );
            let slot = drawing_util::slot_width(self.dashboard.revenue_view.visible_count(), response.rect);
            fundamentals::apply_view_input(&cols[0], &response, &mut self.dashboard.revenue_view, slot);

            cols[1].strong("Profitability Mix");
            let response = fundamentals::draw_ratios(
                &mut cols[1],
                &self.dashboard.ratios,
                &mut self.dashboard.ratio_view,
                settings::SMALL_CHART_HEIGHT,
            );
            let slot = drawing_util::slot_width(self.dashboard.ratio_view.visible_count(), response.rect);
            fundamentals::apply_view_input(&cols[1], &response, &mut self.dashboard.ratio_view, slot);
        });
    }

    fn news_feed(&self, ui: &mut egui::Ui) {
        ui.strong("Real-time Intelligence Feed");
        ui.weak("Consolidated newsroom, sentiment pulses, and filings with source transparency.");
        ui.add_space(4.0);
        for item in self.dashboard.profile().news {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(format!("↗ {}", item.category.label())).small().color(ACCENT));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.small(item.display_time());
                    });
                });
                ui.strong(item.title);
                ui.label(item.summary);
                ui.horizontal(|ui| {
                    let color = match item.sentiment {
                        Sentiment::Positive => EMERALD,
                        Sentiment::Neutral => ui.visuals().weak_text_color(),
                        Sentiment::Negative => AMBER,
                    };
                    ui.label(egui::RichText::new(item.sentiment.label()).small().strong().color(color));
                    ui.small(format!("Source: {}", item.source));
                });
            });
        }
    }

    fn alerts_form(&mut self, ui: &mut egui::Ui) {
        let alerts = &mut self.dashboard.alerts;
        ui.horizontal(|ui| {
            ui.strong("Customized Alerts");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(FormAction::SaveAlertPreferences.label()).clicked() {
                    preferences::press(FormAction::SaveAlertPreferences);
                }
            });
        });
        ui.weak("Tailor threshold-based price triggers and intelligence notifications.");

        ui.columns(2, |cols| {
            cols[0].label(egui::RichText::new("Delivery channels").strong());
            cols[0].checkbox(&mut alerts.enable_email, "Email notifications");
            cols[0].checkbox(&mut alerts.enable_push, "Push notifications");

            let mut threshold = alerts.price_threshold();
            cols[1].label("Price swing trigger (% change)");
            if cols[1]
                .add(egui::Slider::new(&mut threshold, preferences::PRICE_THRESHOLD_RANGE))
                .changed()
            {
                alerts.set_price_threshold(threshold);
            }
            cols[1].small(alerts.threshold_caption());
            egui::ComboBox::from_label("Lookback window")
                .selected_text(alerts.lookback.label())
                .show_ui(&mut cols[1], |ui| {
                    for option in Lookback::ALL {
                        ui.selectable_value(&mut alerts.lookback, option, option.label());
                    }
                });
        });

        ui.label(egui::RichText::new("Include content types").strong());
        ui.horizontal(|ui| {
            ui.checkbox(&mut alerts.include_news, "Price & news catalysts");
            ui.checkbox(&mut alerts.include_filings, "Regulatory filings");
            ui.checkbox(&mut alerts.include_sentiment, "Market sentiment scans");
        });
    }

    fn risk_assessment(&mut self, ui: &mut egui::Ui) {
        ui.strong("Risk Assessment");
        ui.weak("Expand each scenario to review looming downside catalysts and mitigation cues.");
        let risks = self.dashboard.profile().risks;
        let accordion = &mut self.dashboard.risks;

        for risk in risks {
            let is_open = accordion.is_open(risk.id);
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                let toggled = ui
                    .horizontal(|ui| {
                        let color = match risk.severity {
                            Severity::Medium => AMBER,
                            Severity::High => ROSE,
                        };
                        ui.label(egui::RichText::new("⚠").color(color));
                        ui.vertical(|ui| {
                            ui.strong(risk.title);
                            ui.label(
                                egui::RichText::new(format!("{} risk", risk.severity.label()))
                                    .small()
                                    .color(color),
                            );
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.button(if is_open { "Hide" } else { "Review" }).clicked()
                        })
                        .inner
                    })
                    .inner;
                if toggled {
                    accordion.toggle(risk.id);
                }
                if is_open {
                    ui.label(risk.description);
                    ui.label(
                        egui::RichText::new(format!("Mitigation: {}", risk.mitigation)).color(ACCENT),
                    );
                }
            });
        }
    }

    fn metrics(&mut self, ui: &mut egui::Ui) {
        let rows = self.dashboard.profile().metrics_table;
        let table = &mut self.dashboard.metrics_table;

        ui.horizontal(|ui| {
            ui.strong("Financial Quality Snapshot");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut filter = table.filter().to_string();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut filter)
                        .hint_text("Year 2023...")
                        .desired_width(140.0),
                );
                if response.changed() {
                    table.set_filter(filter);
                }
                ui.label("Filter");
            });
        });
        ui.weak("Sort and filter operating metrics to benchmark consistency.");

        let page_rows = table.page_rows(rows);
        egui::Grid::new("metrics_table")
            .striped(true)
            .num_columns(SortKey::ALL.len())
            .min_col_width(90.0)
            .show(ui, |ui| {
                for key in SortKey::ALL {
                    let arrow = if table.sort_key() == key { table.direction().arrow() } else { "" };
                    if ui.button(format!("{} {}", key.header(), arrow)).clicked() {
                        table.sort_by(key);
                    }
                }
                ui.end_row();

                for row in &page_rows {
                    ui.strong(row.year);
                    ui.label(axes_util::format_inr(row.revenue));
                    ui.label(format!("{:.1}%", row.profit_margin));
                    ui.label(format!("{:.1}%", row.roe));
                    ui.label(format!("{:.2}", row.debt_equity));
                    ui.label(format!("{:.1}%", row.market_share));
                    ui.end_row();
                }
            });
        if page_rows.is_empty() {
            ui.weak(metrics_table::NO_MATCHES);
        }

        ui.horizontal(|ui| {
            let (first, last, total) = table.showing(rows);
            ui.small(format!("Showing {first}-{last} of {total}"));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.add_enabled(table.can_go_next(rows), egui::Button::new("Next")).clicked() {
                    table.next_page(rows);
                }
                ui.small(table.page_label(rows));
                if ui.add_enabled(table.can_go_previous(), egui::Button::new("Previous")).clicked() {
                    table.previous_page();
                }
            });
        });
    }

    fn account(&mut self, ui: &mut egui::Ui) {
        let account = &mut self.dashboard.account;
        ui.columns(3, |cols| {
            cols[0].strong("Profile");
            cols[0].weak("Manage personal identifiers for compliance-ready communication.");
            cols[0].label("Full name");
            cols[0].text_edit_singleline(&mut account.profile.full_name);
            cols[0].label("Email address");
            cols[0].text_edit_singleline(&mut account.profile.email);
            cols[0].label("Role / designation");
            cols[0].text_edit_singleline(&mut account.profile.role);

            cols[1].strong("Workspace");
            cols[1].weak("Configure data refresh cadence, notifications, and sharing settings.");
            cols[1].checkbox(&mut account.workspace.refresh_daily, "Refresh daily snapshots");
            cols[1].checkbox(&mut account.workspace.share_with_team, "Share dashboards with team");
            egui::ComboBox::from_label("Digest frequency")
                .selected_text(account.workspace.digest.label())
                .show_ui(&mut cols[1], |ui| {
                    for option in DigestFrequency::ALL {
                        ui.selectable_value(&mut account.workspace.digest, option, option.label());
                    }
                });

            cols[2].strong("Subscription");
            cols[2].weak("Review your plan and scale coverage effortlessly.");
            cols[2].label(egui::RichText::new("CURRENT PLAN").small().color(ACCENT));
            cols[2].label(egui::RichText::new(account.plan_caption()).strong());
            cols[2].small("₹14,999 / year • Includes premium AI models, 200 alert rules, and NSE/BSE coverage.");
            cols[2].horizontal(|ui| {
                for plan in [Plan::Starter, Plan::Growth, Plan::Institutional] {
                    ui.radio_value(&mut account.profile.plan, plan, plan.label());
                }
            });
            for action in [FormAction::ManageBilling, FormAction::UpgradePlan] {
                if cols[2].button(action.label()).clicked() {
                    preferences::press(action);
                }
            }
        });
    }

    fn help_center(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.weak("Quick answers about coverage, scoring logic, and your account.");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.dashboard.help.query)
                        .hint_text("Search help...")
                        .desired_width(180.0),
                );
            });
        });

        let faqs = self.dashboard.help.filtered(self.dashboard.profile().faqs);
        if faqs.is_empty() {
            ui.weak(help::NO_MATCHES);
        }
        for faq in faqs {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.strong(faq.question);
                ui.label(faq.answer);
            });
        }
    }

    fn footer(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.small(
                "Data sources: SEBI filings, NSE/BSE disclosures, Bloomberg, industry research, \
                 and proprietary sentiment engines refreshed hourly.",
            );
            ui.small(format!("© {} AstraMultibagger Intelligence.", Utc::now().year()));
            ui.small(
                "Disclaimer: Analytics are AI-assisted scenario explorations and do not constitute \
                 investment advice. Assess risk appetite and consult certified advisors before \
                 allocating capital. Market investments are subject to risks including principal loss.",
            );
        });
    }
}

fn stat(ui: &mut egui::Ui, caption: &str, value: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(caption.to_uppercase()).small());
        ui.strong(value);
    });
}

fn gauge_dial(ui: &mut egui::Ui, score: u8) -> egui::Response {
    let (response, painter) = ui.allocate_painter(egui::vec2(160.0, 170.0), egui::Sense::click());
    let center = response.rect.center_top() + egui::vec2(0.0, 75.0);
    let radius = 60.0;
    let trail = ui.visuals().widgets.noninteractive.bg_stroke.color;
    let text_color = ui.visuals().text_color();

    painter.circle_stroke(center, radius, egui::Stroke::new(10.0, trail));
    let fraction = gauge::fill_fraction(score);
    let steps = (fraction * 64.0).ceil() as usize;
    if steps > 0 {
        let points: Vec<egui::Pos2> = (0..=steps)
            .map(|i| {
                let angle = -std::f32::consts::FRAC_PI_2
                    + std::f32::consts::TAU * fraction * i as f32 / steps as f32;
                center + radius * egui::vec2(angle.cos(), angle.sin())
            })
            .collect();
        painter.add(egui::Shape::line(points, egui::Stroke::new(10.0, ACCENT)));
    }

    painter.text(center - egui::vec2(0.0, 22.0), egui::Align2::CENTER_CENTER, "Potential", egui::FontId::proportional(11.0), text_color);
    painter.text(center, egui::Align2::CENTER_CENTER, score.to_string(), egui::FontId::proportional(30.0), text_color);
    painter.text(center + egui::vec2(0.0, 22.0), egui::Align2::CENTER_CENTER, "out of 100", egui::FontId::proportional(11.0), text_color);
    painter.text(
        response.rect.center_bottom() - egui::vec2(0.0, 6.0),
        egui::Align2::CENTER_BOTTOM,
        "View breakdown →",
        egui::FontId::proportional(12.0),
        ACCENT,
    );

    response.on_hover_text(format!(
        "Multibagger potential score {score} out of 100. Click to view contributing factors."
    ))
}

fn candle_chart(
    ui: &mut egui::Ui,
    window: &mut CandleWindow,
    crosshair: &mut Crosshair,
    unit: BucketUnit,
    show_candles: bool,
    colors: CandleColors,
) {
    let size = egui::vec2(ui.available_width(), settings::CANDLE_CHART_HEIGHT);
    let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
    let rect = response.rect;
    let price_rect = egui::Rect::from_min_max(
        rect.min,
        egui::pos2(
            rect.max.x - settings::PRICE_AXIS_WIDTH,
            rect.max.y - settings::CHART_BOTTOM_MARGIN,
        ),
    );

    if window.candles.is_empty() {
        painter.text(
            price_rect.center(),
            egui::Align2::CENTER_CENTER,
            "No price data for this timeframe.",
            egui::FontId::proportional(14.0),
            ui.visuals().weak_text_color(),
        );
        return;
    }

    if response.double_clicked() {
        window.reset_view();
        log::debug!("candle view reset");
    }
    if response.hovered() {
        let scroll = ui.input(|i| i.raw_scroll_delta.y);
        if scroll != 0.0 {
            window.zoom(scroll as f64);
        }
    }
    if response.dragged() && response.drag_delta().x != 0.0 {
        let slot = drawing_util::slot_width(window.view.visible_count(), price_rect);
        window.drag(response.drag_delta().x, slot);
        ui.ctx().request_repaint();
    } else if response.drag_stopped() {
        window.end_drag();
    }

    window.update_price_range_extrema();
    let scale_price = axes_util::create_scale_price_fn(window, price_rect);
    let clipped = painter.with_clip_rect(price_rect);

    axes::draw(ui, &painter, price_rect, window, unit, &scale_price);
    if let Some(pos) = response.hover_pos().filter(|p| price_rect.contains(*p)) {
        crosshair.highlight_candle(&clipped, price_rect, window, pos, &scale_price);
    }
    hlcbars::draw(&clipped, price_rect, window, show_candles, colors, &scale_price);

    if let Some(pos) = response.hover_pos().filter(|p| price_rect.contains(*p)) {
        crosshair.draw(&clipped, price_rect, pos);
        if let Some(info) = crosshair.candle_info(pos, window, price_rect) {
            clipped.text(
                price_rect.left_top() + egui::vec2(6.0, 4.0),
                egui::Align2::LEFT_TOP,
                info,
                egui::FontId::monospace(11.0),
                ui.visuals().strong_text_color(),
            );
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::SidePanel::left("navigation")
            .resizable(false)
            .exact_width(220.0)
            .show(ctx, |ui| self.sidebar(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut visibility = Vec::with_capacity(SECTIONS.len());
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.section_heading(ui, "overview", "Overview", &mut visibility);
                    self.search_bar(ui);
                    ui.add_space(8.0);
                    self.overview(ui);
                    ui.add_space(16.0);

                    self.section_heading(ui, "analytics", "Intelligent Analytics Studio", &mut visibility);
                    self.analytics(ui);
                    ui.add_space(16.0);

                    self.section_heading(ui, "alerts", "Alerts & Intelligence", &mut visibility);
                    self.news_feed(ui);
                    ui.add_space(10.0);
                    self.alerts_form(ui);
                    ui.add_space(16.0);

                    self.section_heading(ui, "risks", "Risk Radar", &mut visibility);
                    self.risk_assessment(ui);
                    ui.add_space(10.0);
                    self.metrics(ui);
                    ui.add_space(16.0);

                    self.section_heading(ui, "account", "Account", &mut visibility);
                    self.account(ui);
                    ui.add_space(16.0);

                    self.section_heading(ui, "help", "Help & FAQ", &mut visibility);
                    self.help_center(ui);
                    ui.add_space(16.0);

                    self.footer(ui);
                });
            self.dashboard.navigation.observe(&visibility);
        });

        if self.dashboard.gauge.is_open() {
            self.gauge_window(ctx);
        }
    }
}
