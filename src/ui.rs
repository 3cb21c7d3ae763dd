use anyhow::Result;
use chrono::{Datelike, Utc};
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use std::io;

use bizvision::{
    dashboard::{KPI_CARDS, MONTHLY_FIGURES},
    department_rollup,
    entities::{ExpenseCategory, ExpenseFrequency, Industry, Position},
    expenses_by_category,
    innovation::{CategoryFilter, InnovationCatalog, INDUSTRY_INSIGHTS, ROADMAP},
    parse_amount, parse_performance, profit_margin,
    projection::{project, KeyProjections, RISK_FACTORS},
    state::{BusinessState, Update},
    total_annual_expenses,
    dashboard::Trend,
    EmployeeDraft, ExpenseDraft, GrowthAssumptions, MarketComparison, PayrollSummary,
    PricingAnalysis, PricingInputs, ProjectionHorizon,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Projections,
    Payroll,
    Pricing,
    Innovation,
}

impl Page {
    pub fn next(&self) -> Self {
        match self {
            Page::Dashboard => Page::Projections,
            Page::Projections => Page::Payroll,
            Page::Payroll => Page::Pricing,
            Page::Pricing => Page::Innovation,
            Page::Innovation => Page::Dashboard,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Page::Dashboard => Page::Innovation,
            Page::Projections => Page::Dashboard,
            Page::Payroll => Page::Projections,
            Page::Pricing => Page::Payroll,
            Page::Innovation => Page::Pricing,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Projections => "Projections",
            Page::Payroll => "Payroll",
            Page::Pricing => "Pricing",
            Page::Innovation => "Innovation",
        }
    }
}

// ============================================================================
// FORMS
// ============================================================================

/// Add-employee side panel. Position is a select with a placeholder
/// slot (index 0) so an untouched form still fails validation the way
/// an empty text field would.
pub struct EmployeeForm {
    pub name: String,
    pub position_idx: usize, // 0 = not selected, 1..= Position::ALL[idx-1]
    pub department: String,
    pub salary: String,
    pub performance: String,
    pub focus: usize,
}

impl EmployeeForm {
    const FIELDS: usize = 5;

    pub fn new() -> Self {
        EmployeeForm {
            name: String::new(),
            position_idx: 0,
            department: String::new(),
            salary: String::new(),
            performance: String::new(),
            focus: 0,
        }
    }

    pub fn position_label(&self) -> &'static str {
        if self.position_idx == 0 {
            "Select Position"
        } else {
            Position::ALL[self.position_idx - 1].as_str()
        }
    }

    pub fn draft(&self) -> EmployeeDraft {
        let position = if self.position_idx == 0 {
            String::new()
        } else {
            Position::ALL[self.position_idx - 1].as_str().to_string()
        };

        EmployeeDraft {
            name: self.name.clone(),
            position,
            department: self.department.clone(),
            salary: parse_amount(&self.salary),
            hire_date: None,
            performance: parse_performance(&self.performance),
        }
    }
}

/// Add-expense side panel.
pub struct ExpenseForm {
    pub category_idx: usize, // 0 = not selected, 1..= ExpenseCategory::ALL[idx-1]
    pub description: String,
    pub amount: String,
    pub frequency_idx: usize, // into ExpenseFrequency::ALL
    pub focus: usize,
}

impl ExpenseForm {
    const FIELDS: usize = 4;

    pub fn new() -> Self {
        ExpenseForm {
            category_idx: 0,
            description: String::new(),
            amount: String::new(),
            frequency_idx: 0,
            focus: 0,
        }
    }

    pub fn category_label(&self) -> &'static str {
        if self.category_idx == 0 {
            "Select Category"
        } else {
            ExpenseCategory::ALL[self.category_idx - 1].as_str()
        }
    }

    pub fn frequency(&self) -> ExpenseFrequency {
        ExpenseFrequency::ALL[self.frequency_idx]
    }

    pub fn draft(&self) -> ExpenseDraft {
        ExpenseDraft {
            category: if self.category_idx == 0 {
                None
            } else {
                Some(ExpenseCategory::ALL[self.category_idx - 1])
            },
            amount: parse_amount(&self.amount),
            description: self.description.clone(),
            frequency: Some(self.frequency()),
        }
    }
}

/// Projection-parameters side panel: revenue, industry, growth rates.
pub struct AssumptionsForm {
    pub revenue: String,
    pub industry_idx: usize, // 0 = not selected, 1..= Industry::ALL[idx-1]
    pub conservative: String,
    pub moderate: String,
    pub aggressive: String,
    pub focus: usize,
}

impl AssumptionsForm {
    const FIELDS: usize = 5;

    pub fn from_current(
        revenue: f64,
        industry: Option<Industry>,
        growth: &GrowthAssumptions,
    ) -> Self {
        let industry_idx = industry
            .and_then(|current| Industry::ALL.iter().position(|i| *i == current))
            .map(|i| i + 1)
            .unwrap_or(0);

        AssumptionsForm {
            revenue: trim_number(revenue),
            industry_idx,
            conservative: trim_number(growth.conservative),
            moderate: trim_number(growth.moderate),
            aggressive: trim_number(growth.aggressive),
            focus: 0,
        }
    }

    pub fn industry_label(&self) -> &'static str {
        if self.industry_idx == 0 {
            "Select Industry"
        } else {
            Industry::ALL[self.industry_idx - 1].as_str()
        }
    }

    pub fn industry(&self) -> Option<Industry> {
        if self.industry_idx == 0 {
            None
        } else {
            Some(Industry::ALL[self.industry_idx - 1])
        }
    }

    pub fn growth(&self) -> GrowthAssumptions {
        GrowthAssumptions {
            conservative: parse_amount(&self.conservative),
            moderate: parse_amount(&self.moderate),
            aggressive: parse_amount(&self.aggressive),
        }
    }
}

/// Pricing-calculator side panel: the four number inputs.
pub struct PricingForm {
    pub current_price: String,
    pub cost_of_goods: String,
    pub inflation_rate: String,
    pub competitor_price: String,
    pub focus: usize,
}

impl PricingForm {
    const FIELDS: usize = 4;

    pub fn from_inputs(inputs: &PricingInputs) -> Self {
        PricingForm {
            current_price: trim_number(inputs.current_price),
            cost_of_goods: trim_number(inputs.cost_of_goods),
            inflation_rate: trim_number(inputs.inflation_rate),
            competitor_price: trim_number(inputs.competitor_price),
            focus: 0,
        }
    }

    pub fn inputs(&self) -> PricingInputs {
        PricingInputs {
            current_price: parse_amount(&self.current_price),
            cost_of_goods: parse_amount(&self.cost_of_goods),
            inflation_rate: parse_amount(&self.inflation_rate),
            competitor_price: parse_amount(&self.competitor_price),
        }
    }
}

pub enum ActiveForm {
    None,
    Employee(EmployeeForm),
    Expense(ExpenseForm),
    Assumptions(AssumptionsForm),
    Pricing(PricingForm),
}

// ============================================================================
// APP
// ============================================================================

pub struct App {
    pub state: BusinessState,
    pub current_page: Page,
    pub payroll_table: TableState,
    pub expense_table: TableState,
    pub innovation_table: TableState,
    pub innovation_filter: CategoryFilter,
    pub catalog: InnovationCatalog,
    pub pricing_inputs: PricingInputs,
    pub growth: GrowthAssumptions,
    pub horizon: ProjectionHorizon,
    pub active_form: ActiveForm,
}

impl App {
    pub fn new(state: BusinessState) -> Self {
        let mut payroll_table = TableState::default();
        if !state.data().employees.is_empty() {
            payroll_table.select(Some(0));
        }

        let mut expense_table = TableState::default();
        if !state.data().expenses.is_empty() {
            expense_table.select(Some(0));
        }

        let mut innovation_table = TableState::default();
        innovation_table.select(Some(0));

        Self {
            state,
            current_page: Page::Dashboard,
            payroll_table,
            expense_table,
            innovation_table,
            innovation_filter: CategoryFilter::All,
            catalog: InnovationCatalog::new(),
            pricing_inputs: PricingInputs::default(),
            growth: GrowthAssumptions::default(),
            horizon: ProjectionHorizon::default(),
            active_form: ActiveForm::None,
        }
    }

    pub fn next_page(&mut self) {
        self.current_page = self.current_page.next();
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.previous();
    }

    /// Row count behind the cursor on the current page, if it has one.
    fn current_rows(&self) -> usize {
        match self.current_page {
            Page::Payroll => self.state.data().employees.len(),
            Page::Pricing => self.state.data().expenses.len(),
            Page::Innovation => self.catalog.filtered(self.innovation_filter).len(),
            _ => 0,
        }
    }

    fn current_table(&mut self) -> Option<&mut TableState> {
        match self.current_page {
            Page::Payroll => Some(&mut self.payroll_table),
            Page::Pricing => Some(&mut self.expense_table),
            Page::Innovation => Some(&mut self.innovation_table),
            _ => None,
        }
    }

    pub fn next_row(&mut self) {
        let len = self.current_rows();
        if len == 0 {
            return;
        }
        if let Some(table) = self.current_table() {
            let i = match table.selected() {
                Some(i) => {
                    if i >= len - 1 {
                        0
                    } else {
                        i + 1
                    }
                }
                None => 0,
            };
            table.select(Some(i));
        }
    }

    pub fn previous_row(&mut self) {
        let len = self.current_rows();
        if len == 0 {
            return;
        }
        if let Some(table) = self.current_table() {
            let i = match table.selected() {
                Some(i) => {
                    if i == 0 {
                        len - 1
                    } else {
                        i - 1
                    }
                }
                None => 0,
            };
            table.select(Some(i));
        }
    }

    pub fn cycle_filter(&mut self, forward: bool) {
        self.innovation_filter = if forward {
            self.innovation_filter.next()
        } else {
            self.innovation_filter.previous()
        };

        // Keep the cursor inside the narrowed list
        let len = self.catalog.filtered(self.innovation_filter).len();
        if len == 0 {
            self.innovation_table.select(None);
        } else {
            self.innovation_table.select(Some(0));
        }
    }
}

// ============================================================================
// TERMINAL LOOP
// ============================================================================

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if !matches!(app.active_form, ActiveForm::None) {
                handle_form_key(app, key.code, key.modifiers);
                continue;
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        app.previous_page();
                    } else {
                        app.next_page();
                    }
                }
                KeyCode::BackTab => app.previous_page(),
                KeyCode::Char('a') if app.current_page == Page::Payroll => {
                    app.active_form = ActiveForm::Employee(EmployeeForm::new());
                }
                KeyCode::Char('a') if app.current_page == Page::Pricing => {
                    app.active_form = ActiveForm::Expense(ExpenseForm::new());
                }
                KeyCode::Char('e') if app.current_page == Page::Projections => {
                    let data = app.state.data();
                    app.active_form = ActiveForm::Assumptions(AssumptionsForm::from_current(
                        data.current_revenue,
                        data.industry,
                        &app.growth,
                    ));
                }
                KeyCode::Char('e') if app.current_page == Page::Pricing => {
                    app.active_form = ActiveForm::Pricing(PricingForm::from_inputs(&app.pricing_inputs));
                }
                KeyCode::Char('h') if app.current_page == Page::Projections => {
                    app.horizon = app.horizon.next();
                }
                KeyCode::Left if app.current_page == Page::Innovation => app.cycle_filter(false),
                KeyCode::Right if app.current_page == Page::Innovation => app.cycle_filter(true),
                KeyCode::Down | KeyCode::Char('j') => app.next_row(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_row(),
                _ => {}
            }
        }
    }
}

/// Route one key into the open form. Submitting a draft that fails
/// validation keeps the form open with nothing applied.
fn handle_form_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Esc => {
            app.active_form = ActiveForm::None;
            return;
        }
        KeyCode::Enter => {
            match &app.active_form {
                ActiveForm::Employee(form) => {
                    if app.state.submit(Update::AddEmployee(form.draft()))
                        == bizvision::Outcome::Applied
                    {
                        if app.payroll_table.selected().is_none() {
                            app.payroll_table.select(Some(0));
                        }
                        app.active_form = ActiveForm::None;
                    }
                    // Declined: silently keep the form open
                }
                ActiveForm::Expense(form) => {
                    if app.state.submit(Update::AddExpense(form.draft()))
                        == bizvision::Outcome::Applied
                    {
                        if app.expense_table.selected().is_none() {
                            app.expense_table.select(Some(0));
                        }
                        app.active_form = ActiveForm::None;
                    }
                }
                ActiveForm::Assumptions(form) => {
                    app.growth = form.growth();
                    let revenue = parse_amount(&form.revenue);
                    let industry = form.industry();
                    app.state.submit(Update::SetCurrentRevenue(revenue));
                    app.state.submit(Update::SetIndustry(industry));
                    app.active_form = ActiveForm::None;
                }
                ActiveForm::Pricing(form) => {
                    app.pricing_inputs = form.inputs();
                    app.active_form = ActiveForm::None;
                }
                ActiveForm::None => {}
            }
            return;
        }
        _ => {}
    }

    let shift = modifiers.contains(KeyModifiers::SHIFT);
    match &mut app.active_form {
        ActiveForm::Employee(form) => {
            match code {
                KeyCode::Down => form.focus = (form.focus + 1) % EmployeeForm::FIELDS,
                KeyCode::Tab if !shift => form.focus = (form.focus + 1) % EmployeeForm::FIELDS,
                KeyCode::Up | KeyCode::BackTab => {
                    form.focus = (form.focus + EmployeeForm::FIELDS - 1) % EmployeeForm::FIELDS
                }
                KeyCode::Tab => {
                    form.focus = (form.focus + EmployeeForm::FIELDS - 1) % EmployeeForm::FIELDS
                }
                KeyCode::Left if form.focus == 1 => {
                    form.position_idx =
                        (form.position_idx + Position::ALL.len()) % (Position::ALL.len() + 1);
                }
                KeyCode::Right if form.focus == 1 => {
                    form.position_idx = (form.position_idx + 1) % (Position::ALL.len() + 1);
                }
                KeyCode::Char(c) => match form.focus {
                    0 => form.name.push(c),
                    2 => form.department.push(c),
                    3 => form.salary.push(c),
                    4 => form.performance.push(c),
                    _ => {}
                },
                KeyCode::Backspace => {
                    match form.focus {
                        0 => form.name.pop(),
                        2 => form.department.pop(),
                        3 => form.salary.pop(),
                        4 => form.performance.pop(),
                        _ => None,
                    };
                }
                _ => {}
            }
        }
        ActiveForm::Expense(form) => match code {
            KeyCode::Down => form.focus = (form.focus + 1) % ExpenseForm::FIELDS,
            KeyCode::Tab if !shift => form.focus = (form.focus + 1) % ExpenseForm::FIELDS,
            KeyCode::Up | KeyCode::BackTab => {
                form.focus = (form.focus + ExpenseForm::FIELDS - 1) % ExpenseForm::FIELDS
            }
            KeyCode::Tab => {
                form.focus = (form.focus + ExpenseForm::FIELDS - 1) % ExpenseForm::FIELDS
            }
            KeyCode::Left if form.focus == 0 => {
                form.category_idx = (form.category_idx + ExpenseCategory::ALL.len())
                    % (ExpenseCategory::ALL.len() + 1);
            }
            KeyCode::Right if form.focus == 0 => {
                form.category_idx = (form.category_idx + 1) % (ExpenseCategory::ALL.len() + 1);
            }
            KeyCode::Left if form.focus == 3 => {
                form.frequency_idx =
                    (form.frequency_idx + ExpenseFrequency::ALL.len() - 1) % ExpenseFrequency::ALL.len();
            }
            KeyCode::Right if form.focus == 3 => {
                form.frequency_idx = (form.frequency_idx + 1) % ExpenseFrequency::ALL.len();
            }
            KeyCode::Char(c) => match form.focus {
                1 => form.description.push(c),
                2 => form.amount.push(c),
                _ => {}
            },
            KeyCode::Backspace => {
                match form.focus {
                    1 => form.description.pop(),
                    2 => form.amount.pop(),
                    _ => None,
                };
            }
            _ => {}
        },
        ActiveForm::Assumptions(form) => match code {
            KeyCode::Down => form.focus = (form.focus + 1) % AssumptionsForm::FIELDS,
            KeyCode::Tab if !shift => form.focus = (form.focus + 1) % AssumptionsForm::FIELDS,
            KeyCode::Up | KeyCode::BackTab => {
                form.focus = (form.focus + AssumptionsForm::FIELDS - 1) % AssumptionsForm::FIELDS
            }
            KeyCode::Tab => {
                form.focus = (form.focus + AssumptionsForm::FIELDS - 1) % AssumptionsForm::FIELDS
            }
            KeyCode::Left if form.focus == 1 => {
                form.industry_idx =
                    (form.industry_idx + Industry::ALL.len()) % (Industry::ALL.len() + 1);
            }
            KeyCode::Right if form.focus == 1 => {
                form.industry_idx = (form.industry_idx + 1) % (Industry::ALL.len() + 1);
            }
            KeyCode::Char(c) => match form.focus {
                0 => form.revenue.push(c),
                2 => form.conservative.push(c),
                3 => form.moderate.push(c),
                4 => form.aggressive.push(c),
                _ => {}
            },
            KeyCode::Backspace => {
                match form.focus {
                    0 => form.revenue.pop(),
                    2 => form.conservative.pop(),
                    3 => form.moderate.pop(),
                    4 => form.aggressive.pop(),
                    _ => None,
                };
            }
            _ => {}
        },
        ActiveForm::Pricing(form) => match code {
            KeyCode::Down => form.focus = (form.focus + 1) % PricingForm::FIELDS,
            KeyCode::Tab if !shift => form.focus = (form.focus + 1) % PricingForm::FIELDS,
            KeyCode::Up | KeyCode::BackTab => {
                form.focus = (form.focus + PricingForm::FIELDS - 1) % PricingForm::FIELDS
            }
            KeyCode::Tab => {
                form.focus = (form.focus + PricingForm::FIELDS - 1) % PricingForm::FIELDS
            }
            KeyCode::Char(c) => match form.focus {
                0 => form.current_price.push(c),
                1 => form.cost_of_goods.push(c),
                2 => form.inflation_rate.push(c),
                3 => form.competitor_price.push(c),
                _ => {}
            },
            KeyCode::Backspace => {
                match form.focus {
                    0 => form.current_price.pop(),
                    1 => form.cost_of_goods.pop(),
                    2 => form.inflation_rate.pop(),
                    3 => form.competitor_price.pop(),
                    _ => None,
                };
            }
            _ => {}
        },
        ActiveForm::None => {}
    }
}

// ============================================================================
// RENDERING
// ============================================================================

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    // Side-panel form on the pages that have one
    if !matches!(app.active_form, ActiveForm::None) {
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(60), // Page content
                Constraint::Percentage(40), // Form panel
            ])
            .split(chunks[1]);

        render_page(f, content_chunks[0], app);
        render_form(f, content_chunks[1], app);
    } else {
        render_page(f, chunks[1], app);
    }

    render_status_bar(f, chunks[2], app);
}

fn render_page(f: &mut Frame, area: Rect, app: &mut App) {
    match app.current_page {
        Page::Dashboard => render_dashboard(f, area, app),
        Page::Projections => render_projections(f, area, app),
        Page::Payroll => render_payroll(f, area, app),
        Page::Pricing => render_pricing(f, area, app),
        Page::Innovation => render_innovation(f, area, app),
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let pages = [
        Page::Dashboard,
        Page::Projections,
        Page::Payroll,
        Page::Pricing,
        Page::Innovation,
    ];

    let mut tab_spans = vec![];
    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *page == app.current_page {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(page.title(), style));
    }

    let data = app.state.data();
    let company = if data.company_name.is_empty() {
        "New Company"
    } else {
        data.company_name.as_str()
    };

    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        company.to_string(),
        Style::default().fg(Color::White),
    ));
    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("👥 {}", data.employees.len()),
        Style::default().fg(Color::Green),
    ));
    tab_spans.push(Span::raw("  "));
    tab_spans.push(Span::styled(
        format!("💸 {}", data.expenses.len()),
        Style::default().fg(Color::Red),
    ));

    let header = Paragraph::new(vec![Line::from(tab_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(header, area);
}

// ----------------------------------------------------------------------------
// Dashboard page
// ----------------------------------------------------------------------------

fn render_dashboard(f: &mut Frame, area: Rect, _app: &App) {
    let mut content = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "  Business Overview",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
    ];

    for kpi in KPI_CARDS {
        let (arrow, color) = match kpi.trend {
            Trend::Up => ("↑", Color::Green),
            Trend::Down => ("↓", Color::Red),
        };
        content.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{:<18}", kpi.title),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("{:>10}", kpi.value),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(format!("{} {}", arrow, kpi.change), Style::default().fg(color)),
        ]));
    }

    content.push(Line::from(""));
    content.push(Line::from(vec![Span::styled(
        "  Revenue vs Expenses (last 6 months)",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )]));
    content.push(Line::from(""));
    content.push(Line::from(vec![Span::styled(
        "  Month    Revenue    Expenses      Profit",
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )]));

    for figure in MONTHLY_FIGURES {
        content.push(Line::from(vec![
            Span::raw(format!("  {:<6}", figure.month)),
            Span::styled(
                format!("{:>10}", format_usd(figure.revenue)),
                Style::default().fg(Color::Green),
            ),
            Span::styled(
                format!("{:>12}", format_usd(figure.expenses)),
                Style::default().fg(Color::Red),
            ),
            Span::styled(
                format!("{:>12}", format_usd(figure.profit())),
                Style::default().fg(Color::White),
            ),
        ]));
    }

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Dashboard "),
    );

    f.render_widget(paragraph, area);
}

// ----------------------------------------------------------------------------
// Projections page
// ----------------------------------------------------------------------------

fn render_projections(f: &mut Frame, area: Rect, app: &App) {
    let data = app.state.data();
    let start_year = Utc::now().year();
    let points = project(data.current_revenue, app.horizon, &app.growth, start_year);
    let key = KeyProjections::from_points(&points, &app.growth);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(9)])
        .split(area);

    // Projection table
    let header_cells = ["Year", "Conservative", "Moderate", "Aggressive"]
        .iter()
        .map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = points.iter().map(|p| {
        Row::new(vec![
            Cell::from(format!("{}", p.year)),
            Cell::from(format_usd(p.conservative)).style(Style::default().fg(Color::Green)),
            Cell::from(format_usd(p.moderate)).style(Style::default().fg(Color::Cyan)),
            Cell::from(format_usd(p.aggressive)).style(Style::default().fg(Color::Magenta)),
        ])
        .height(1)
    });

    let title = format!(
        " Revenue Projections - {} ({}% / {}% / {}%) ",
        app.horizon.title(),
        app.growth.conservative,
        app.growth.moderate,
        app.growth.aggressive,
    );

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(16),
            Constraint::Length(16),
            Constraint::Length(16),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(title),
    );

    f.render_widget(table, chunks[0]);

    // Key projections + risk factors
    let mut insight_lines = vec![
        Line::from(vec![
            Span::styled("  5-Year Revenue (Moderate): ", Style::default().fg(Color::Cyan)),
            Span::styled(
                format_usd(key.five_year_moderate),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("  10-Year Revenue (Moderate): ", Style::default().fg(Color::Cyan)),
            Span::styled(
                format_usd(key.ten_year_moderate),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("  CAGR (Moderate Scenario): ", Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("{}%", key.moderate_cagr_pct),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];

    for risk in RISK_FACTORS {
        insight_lines.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(Color::Yellow)),
            Span::styled(risk, Style::default().fg(Color::DarkGray)),
        ]));
    }

    let insights = Paragraph::new(insight_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Key Projections & Risk Factors "),
    );

    f.render_widget(insights, chunks[1]);
}

// ----------------------------------------------------------------------------
// Payroll page
// ----------------------------------------------------------------------------

fn render_payroll(f: &mut Frame, area: Rect, app: &mut App) {
    let data = app.state.data();
    let summary = PayrollSummary::compute(&data.employees, data.current_revenue);
    let rollup = department_rollup(&data.employees);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4 + rollup.len().max(1) as u16),
            Constraint::Min(0),
        ])
        .split(area);

    // KPI strip + department rollup
    let mut top_lines = vec![Line::from(vec![
        Span::styled("  Employees: ", Style::default().fg(Color::Cyan)),
        Span::styled(
            format!("{}", summary.headcount),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled("   Annual Payroll: ", Style::default().fg(Color::Cyan)),
        Span::styled(
            format_usd(summary.total_payroll),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled("   Avg Salary: ", Style::default().fg(Color::Cyan)),
        Span::styled(
            format_usd(summary.average_salary),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled("   Revenue/Employee: ", Style::default().fg(Color::Cyan)),
        Span::styled(
            format_usd(summary.revenue_per_employee),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ])];
    top_lines.push(Line::from(""));

    if rollup.is_empty() {
        top_lines.push(Line::from(vec![Span::styled(
            "  No employees added yet. Press 'a' to get started.",
            Style::default().fg(Color::DarkGray),
        )]));
    } else {
        for dept in &rollup {
            top_lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{:<16}", truncate(&dept.department, 16)),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:>3} employees", dept.employees),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format!("{:>14}", format_usd(dept.total_salary)),
                    Style::default().fg(Color::Cyan),
                ),
            ]));
        }
    }

    let top = Paragraph::new(top_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Payroll by Department "),
    );
    f.render_widget(top, chunks[0]);

    // Employee table with market comparison
    let header_cells = ["Name", "Position", "Department", "Salary", "Market", "Perf"]
        .iter()
        .map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = data.employees.iter().map(|employee| {
        let comparison = MarketComparison::compute(employee);
        let variance = comparison.variance_pct();

        let market_cell = match comparison {
            MarketComparison::NoBenchmark => {
                Cell::from("no benchmark").style(Style::default().fg(Color::DarkGray))
            }
            MarketComparison::Benchmarked { needs_review, .. } => {
                let color = if variance > 10.0 {
                    Color::Red
                } else if variance < -10.0 {
                    Color::Yellow
                } else {
                    Color::Green
                };
                let flag = if needs_review { " ⚠" } else { "" };
                Cell::from(format!("{:+.1}%{}", variance, flag)).style(Style::default().fg(color))
            }
        };

        let stars = "★".repeat(employee.performance as usize);

        Row::new(vec![
            Cell::from(truncate(&employee.name, 20)),
            Cell::from(truncate(&employee.position, 22)),
            Cell::from(truncate(&employee.department, 14)),
            Cell::from(format_usd(employee.salary)),
            market_cell,
            Cell::from(stars).style(Style::default().fg(Color::Yellow)),
        ])
        .height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(22),
            Constraint::Length(24),
            Constraint::Length(16),
            Constraint::Length(12),
            Constraint::Length(14),
            Constraint::Length(7),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Employees "),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, chunks[1], &mut app.payroll_table);
}

// ----------------------------------------------------------------------------
// Pricing page
// ----------------------------------------------------------------------------

fn render_pricing(f: &mut Frame, area: Rect, app: &mut App) {
    let data = app.state.data();
    let total = total_annual_expenses(&data.expenses);
    let margin = profit_margin(data.current_revenue, total);
    let breakdown = expenses_by_category(&data.expenses);
    let analysis = PricingAnalysis::compute(&app.pricing_inputs);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4 + breakdown.len().max(1) as u16),
            Constraint::Length(7),
            Constraint::Min(0),
        ])
        .split(area);

    // Cost overview + category breakdown
    let mut top_lines = vec![
        Line::from(vec![
            Span::styled("  Annual Expenses: ", Style::default().fg(Color::Cyan)),
            Span::styled(
                format_usd(total),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Profit Margin: ", Style::default().fg(Color::Cyan)),
            Span::styled(
                format_pct(margin),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Expenses Tracked: ", Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("{}", data.expenses.len()),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];

    if breakdown.is_empty() {
        top_lines.push(Line::from(vec![Span::styled(
            "  No expenses tracked yet. Press 'a' to add one.",
            Style::default().fg(Color::DarkGray),
        )]));
    } else {
        for entry in &breakdown {
            top_lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{:<12}", entry.category.as_str()),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:>14}/yr", format_usd(entry.annual_total)),
                    Style::default().fg(Color::Red),
                ),
            ]));
        }
    }

    let top = Paragraph::new(top_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Expense Breakdown "),
    );
    f.render_widget(top, chunks[0]);

    // Pricing scenarios
    let mut scenario_lines = vec![Line::from(vec![Span::styled(
        "  Scenario             Price      Margin    Market Position",
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )])];

    for scenario in &analysis.scenarios {
        let margin_color = if scenario.margin_pct > 30.0 {
            Color::Green
        } else if scenario.margin_pct > 15.0 {
            Color::Yellow
        } else {
            Color::Red
        };

        let mut spans = vec![
            Span::raw(format!("  {:<20}", scenario.name)),
            Span::styled(
                format!("{:>8}", format_price(scenario.price)),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("{:>11}", format_pct(scenario.margin_pct)),
                Style::default().fg(margin_color),
            ),
            Span::raw(format!("    {}", scenario.position.as_str())),
        ];
        if scenario.recommended {
            spans.push(Span::styled(
                "  ← Recommended",
                Style::default().fg(Color::Cyan),
            ));
        }
        scenario_lines.push(Line::from(spans));
    }

    scenario_lines.push(Line::from(vec![
        Span::styled("  vs Competitor: ", Style::default().fg(Color::Cyan)),
        Span::styled(
            format_pct(analysis.competitor_comparison_pct),
            Style::default().fg(Color::White),
        ),
        Span::styled("   Adjusted Cost: ", Style::default().fg(Color::Cyan)),
        Span::styled(
            format_price(analysis.inflation_adjusted_cost),
            Style::default().fg(Color::White),
        ),
    ]));

    let scenarios = Paragraph::new(scenario_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Pricing Scenarios "),
    );
    f.render_widget(scenarios, chunks[1]);

    // Expense table
    let header_cells = ["Category", "Description", "Amount", "Frequency", "Annual Cost"]
        .iter()
        .map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = data.expenses.iter().map(|expense| {
        Row::new(vec![
            Cell::from(expense.category.as_str()),
            Cell::from(truncate(&expense.description, 30)),
            Cell::from(format_usd(expense.amount)),
            Cell::from(expense.frequency.as_str()),
            Cell::from(format_usd(expense.annual_amount())).style(Style::default().fg(Color::Red)),
        ])
        .height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(32),
            Constraint::Length(12),
            Constraint::Length(11),
            Constraint::Length(13),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Expense Details "),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, chunks[2], &mut app.expense_table);
}

// ----------------------------------------------------------------------------
// Innovation page
// ----------------------------------------------------------------------------

fn render_innovation(f: &mut Frame, area: Rect, app: &mut App) {
    let filtered = app.catalog.filtered(app.innovation_filter);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(5),
        ])
        .split(area);

    // Industry insights banner
    let mut insight_lines = vec![];
    for (title, blurb) in INDUSTRY_INSIGHTS {
        insight_lines.push(Line::from(vec![
            Span::styled(
                format!("  {}: ", title),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(blurb, Style::default().fg(Color::DarkGray)),
        ]));
    }

    let insights = Paragraph::new(insight_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Industry Insights "),
    );
    f.render_widget(insights, chunks[0]);

    // Opportunity table
    let header_cells = ["Opportunity", "Category", "Impact", "Effort", "ROI", "Timeframe"]
        .iter()
        .map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = filtered.iter().map(|opportunity| {
        let impact_color = match opportunity.impact {
            bizvision::Rating::High => Color::Green,
            bizvision::Rating::Medium => Color::Yellow,
            bizvision::Rating::Low => Color::DarkGray,
        };
        let effort_color = match opportunity.effort {
            bizvision::Rating::High => Color::Red,
            bizvision::Rating::Medium => Color::Yellow,
            bizvision::Rating::Low => Color::Green,
        };

        Row::new(vec![
            Cell::from(truncate(opportunity.title, 32)),
            Cell::from(opportunity.category.as_str()),
            Cell::from(opportunity.impact.as_str()).style(Style::default().fg(impact_color)),
            Cell::from(opportunity.effort.as_str()).style(Style::default().fg(effort_color)),
            Cell::from(format!("{}%", opportunity.roi_pct)).style(Style::default().fg(Color::Green)),
            Cell::from(opportunity.timeframe),
        ])
        .height(1)
    });

    let title = format!(" Innovation Lab - {} ", app.innovation_filter.label());
    let table = Table::new(
        rows,
        [
            Constraint::Length(34),
            Constraint::Length(16),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(title),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, chunks[1], &mut app.innovation_table);

    // Roadmap footer
    let mut roadmap_lines = vec![];
    for (i, (phase, blurb)) in ROADMAP.iter().enumerate() {
        roadmap_lines.push(Line::from(vec![
            Span::styled(
                format!("  {}. {}: ", i + 1, phase),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(truncate(blurb, 80), Style::default().fg(Color::DarkGray)),
        ]));
    }

    let roadmap = Paragraph::new(roadmap_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Implementation Roadmap "),
    );
    f.render_widget(roadmap, chunks[2]);
}

// ----------------------------------------------------------------------------
// Form panels
// ----------------------------------------------------------------------------

fn field_line<'a>(label: &'a str, value: String, focused: bool, is_select: bool) -> Line<'a> {
    let marker = if focused { "→ " } else { "  " };
    let value_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let rendered = if is_select {
        format!("‹ {} ›", value)
    } else if focused {
        format!("{}_", value)
    } else {
        value
    };

    Line::from(vec![
        Span::raw(marker),
        Span::styled(format!("{:<14}", label), Style::default().fg(Color::Cyan)),
        Span::styled(rendered, value_style),
    ])
}

fn form_hint() -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "  Tab/↑↓ move · ←/→ select · Enter submit · Esc cancel",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )]),
    ]
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let (title, mut lines) = match &app.active_form {
        ActiveForm::Employee(form) => (
            " Add Employee ",
            vec![
                Line::from(""),
                field_line("Name", form.name.clone(), form.focus == 0, false),
                Line::from(""),
                field_line("Position", form.position_label().to_string(), form.focus == 1, true),
                Line::from(""),
                field_line("Department", form.department.clone(), form.focus == 2, false),
                Line::from(""),
                field_line("Salary", form.salary.clone(), form.focus == 3, false),
                Line::from(""),
                field_line("Perf (1-5)", form.performance.clone(), form.focus == 4, false),
            ],
        ),
        ActiveForm::Expense(form) => (
            " Add Expense ",
            vec![
                Line::from(""),
                field_line("Category", form.category_label().to_string(), form.focus == 0, true),
                Line::from(""),
                field_line("Description", form.description.clone(), form.focus == 1, false),
                Line::from(""),
                field_line("Amount", form.amount.clone(), form.focus == 2, false),
                Line::from(""),
                field_line("Frequency", form.frequency().as_str().to_string(), form.focus == 3, true),
            ],
        ),
        ActiveForm::Assumptions(form) => (
            " Business Parameters ",
            vec![
                Line::from(""),
                field_line("Revenue", form.revenue.clone(), form.focus == 0, false),
                Line::from(""),
                field_line("Industry", form.industry_label().to_string(), form.focus == 1, true),
                Line::from(""),
                field_line("Conservative", form.conservative.clone(), form.focus == 2, false),
                Line::from(""),
                field_line("Moderate", form.moderate.clone(), form.focus == 3, false),
                Line::from(""),
                field_line("Aggressive", form.aggressive.clone(), form.focus == 4, false),
            ],
        ),
        ActiveForm::Pricing(form) => (
            " Pricing Calculator ",
            vec![
                Line::from(""),
                field_line("Price", form.current_price.clone(), form.focus == 0, false),
                Line::from(""),
                field_line("Cost of Goods", form.cost_of_goods.clone(), form.focus == 1, false),
                Line::from(""),
                field_line("Inflation %", form.inflation_rate.clone(), form.focus == 2, false),
                Line::from(""),
                field_line("Competitor", form.competitor_price.clone(), form.focus == 3, false),
            ],
        ),
        ActiveForm::None => return,
    };

    lines.extend(form_hint());

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(title),
    );

    f.render_widget(panel, area);
}

// ----------------------------------------------------------------------------
// Status bar & helpers
// ----------------------------------------------------------------------------

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut status_spans = vec![Span::styled(
        format!(" {} ", app.current_page.title()),
        Style::default().fg(Color::Cyan),
    )];

    let page_hint: &[(&str, &str)] = match app.current_page {
        Page::Dashboard => &[],
        Page::Projections => &[("e", "Edit Params"), ("h", "Horizon")],
        Page::Payroll => &[("a", "Add Employee")],
        Page::Pricing => &[("a", "Add Expense"), ("e", "Calculator")],
        Page::Innovation => &[("←/→", "Filter")],
    };

    for (key, label) in page_hint {
        status_spans.push(Span::raw("| "));
        status_spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(format!(" {} ", label)));
    }

    status_spans.push(Span::raw("| "));
    status_spans.push(Span::styled("Tab", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Page | "));
    status_spans.push(Span::styled("↑/↓", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Nav | "));
    status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

/// Whole-dollar display with thousands separators.
fn format_usd(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }

    let negative = value < 0.0;
    let whole = value.abs().round() as u64;
    let digits = whole.to_string();

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Cents-precision display for calculator prices.
fn format_price(value: f64) -> String {
    if value.is_finite() {
        format!("${:.2}", value)
    } else {
        "n/a".to_string()
    }
}

fn format_pct(value: f64) -> String {
    if value.is_finite() {
        format!("{:.1}%", value)
    } else {
        "n/a".to_string()
    }
}

/// Drop a trailing ".0" when pre-filling numeric form fields.
fn trim_number(value: f64) -> String {
    if value == value.trunc() {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
