use iced::{
    Element, Length, Theme,
    widget::{button, container, row, space, text},
};
use stockroom_lib::Notice;

/// A dismissable strip announcing `notice`, green for success, red for failure.
pub fn banner<'a, Message>(notice: &Notice, on_dismiss: Message) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let failure = notice.is_failure();

    container(
        row![
            text(notice.to_string()),
            space::horizontal(),
            button(text("Dismiss"))
                .style(button::text)
                .on_press(on_dismiss),
        ]
        .spacing(8),
    )
    .padding(10)
    .width(Length::Fill)
    .style(move |theme: &Theme| {
        let palette = theme.extended_palette();
        let pair = if failure {
            palette.danger.weak
        } else {
            palette.success.weak
        };

        container::Style {
            background: Some(pair.color.into()),
            text_color: Some(pair.text),
            ..container::Style::default()
        }
    })
    .into()
}
