//! Screen drawing

use super::input::row_disabled;
use crate::catalog::Catalog;
use crate::state_machine::{Category, Phase, PickerState, Step, SubmitStatus, MAX_ATTEMPT, MAX_PICK};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

const LOVE: Color = Color::LightRed;
const MUTED: Color = Color::DarkGray;

const CELEBRATION: &str =
    "Hooray! Your choices were sent, and you will hear back very soon!";

pub fn draw(frame: &mut Frame, catalog: &Catalog, state: &PickerState, cursor: usize) {
    let area = frame.area();
    match state.phase() {
        Phase::Prompting | Phase::Sad => draw_invitation(frame, area, state),
        Phase::Planning => draw_planner(frame, area, catalog, state, cursor),
    }
}

fn draw_invitation(frame: &mut Frame, area: Rect, state: &PickerState) {
    let badge = Line::from(Span::styled(
        format!("Valentine Invite - Attempt {}/{MAX_ATTEMPT}", state.attempt()),
        Style::default().fg(LOVE),
    ));

    let mut lines = vec![badge, Line::default()];
    if state.is_sad() {
        lines.extend([
            Line::from(Span::styled(
                "Ok... I'm heartbroken.",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "If you change your mind, I'll be right here.",
                Style::default().fg(MUTED),
            )),
            Line::default(),
            Line::from("[y] Fine, yes    [r] Reset"),
        ]);
    } else {
        lines.extend([
            Line::from(Span::styled(
                state.prompt_text(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "A cozy night, cute treats, and you in the center of it all.",
                Style::default().fg(MUTED),
            )),
            Line::default(),
            Line::from("[y] Yes    [n] No"),
        ]);
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" valentine "));
    frame.render_widget(paragraph, area);
}

fn draw_planner(
    frame: &mut Frame,
    area: Rect,
    catalog: &Catalog,
    state: &PickerState,
    cursor: usize,
) {
    let [header, stepper, options, footer, summary] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(1),
        Constraint::Length(8),
    ])
    .areas(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Let's plan the perfect night",
            Style::default().fg(LOVE).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Choose up to {MAX_PICK} items in each list. Movies can be random if you want."),
            Style::default().fg(MUTED),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, header);

    frame.render_widget(
        Paragraph::new(stepper_line(state)).alignment(Alignment::Center),
        stepper,
    );
    draw_options(frame, options, catalog, state, cursor);

    let back = if state.step == Step::Eat { "      " } else { "[←] Back" };
    let next = match state.step.next() {
        Some(next) if state.can_go_to(next) => "Next [→]",
        _ => "        ",
    };
    frame.render_widget(
        Paragraph::new(format!("{back}    Step {} of 3    {next}", state.step.number()))
            .alignment(Alignment::Center),
        footer,
    );

    draw_summary(frame, summary, state);
}

fn stepper_line(state: &PickerState) -> Line<'static> {
    let mut spans = vec![Span::raw("[h] Home  ")];
    for step in Step::ALL {
        let label = format!(" {} {} ", step.number(), step.label());
        let style = if step == state.step {
            Style::default().fg(Color::Black).bg(LOVE)
        } else if state.can_go_to(step) {
            Style::default()
        } else {
            Style::default().fg(MUTED)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn draw_options(
    frame: &mut Frame,
    area: Rect,
    catalog: &Catalog,
    state: &PickerState,
    cursor: usize,
) {
    let category = state.step.category();
    let selection = state.selection(category);

    let items: Vec<ListItem> = catalog
        .keys(category)
        .into_iter()
        .map(|key| {
            let checked = selection.contains(key);
            let mark = if checked { "[x]" } else { "[ ]" };
            let style = if checked {
                Style::default().fg(LOVE)
            } else if row_disabled(state, category, key) {
                Style::default().fg(MUTED)
            } else {
                Style::default()
            };

            let mut lines = vec![Line::from(Span::styled(format!("{mark} {key}"), style))];
            if let Some(actor) = catalog.actor_for(key).filter(|_| category == Category::Movie) {
                lines.push(Line::from(Span::styled(
                    format!("    {actor}"),
                    Style::default().fg(MUTED),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let mut title = format!(" {}  {}/{MAX_PICK} ", category.label(), selection.len());
    if category == Category::Movie {
        title.push_str(" [x] Randomize 5  [c] Clear ");
    }

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut list_state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_summary(frame: &mut Frame, area: Rect, state: &PickerState) {
    let mut lines: Vec<Line> = Category::ALL
        .iter()
        .map(|category| {
            let picks = state.selection(*category);
            let items = if picks.is_empty() {
                "Pick at least 1".to_string()
            } else {
                picks.joined()
            };
            Line::from(vec![
                Span::styled(
                    format!("{:<7}", category.label()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(items),
            ])
        })
        .collect();

    let status_style = match state.submit_status {
        SubmitStatus::Error => Style::default().fg(Color::Red),
        SubmitStatus::Sent => Style::default().fg(Color::Green),
        _ => Style::default().fg(MUTED),
    };
    lines.push(Line::default());
    let mut status = vec![Span::styled(state.status_message(), status_style)];
    if state.can_submit() && !state.submit_status.is_sending() {
        status.push(Span::raw("    [s] Submit our plan"));
    }
    lines.push(Line::from(status));

    if state.submit_status == SubmitStatus::Sent {
        lines.push(Line::from(Span::styled(
            CELEBRATION,
            Style::default().fg(LOVE).add_modifier(Modifier::BOLD),
        )));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Your picks "));
    frame.render_widget(paragraph, area);
}
