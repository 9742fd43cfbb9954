use bubbletea_password_toggle::prelude::*;
use bubbletea_rs::{quit, Cmd, KeyMsg, Model, Msg, Program};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;

struct Login {
    toggle: PasswordToggle,
    input: TextInput,
    sheet: StyleSheet,
    submitted: bool,
}

impl Model for Login {
    fn init() -> (Self, Option<Cmd>) {
        let toggle = use_password_toggle(
            PasswordToggleOptions::new()
                .password(true)
                .class_names(ClassNames::new().button("font-bold")),
        );
        let mut input = textinput_new();
        input.set_placeholder("password");
        input.set_width(24);
        toggle.input_props().apply(&mut input);
        let focus = input.focus();

        (
            Self {
                toggle,
                input,
                sheet: StyleSheet::default(),
                submitted: false,
            },
            Some(focus),
        )
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            match key.key {
                KeyCode::Esc => return Some(quit()),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Some(quit())
                }
                KeyCode::Enter => {
                    self.submitted = true;
                    return Some(quit());
                }
                _ => {}
            }
        }
        self.toggle.update(msg, Some(&mut self.input))
    }

    fn view(&self) -> String {
        if self.submitted {
            return format!(
                "Submitted {} characters.\n",
                self.toggle.value().chars().count()
            );
        }
        let help = Style::new()
            .foreground(Color::from("#626262"))
            .render("ctrl+r show/hide • enter submit • esc quit");
        format!(
            "Password\n\n{}\n\n{}\n",
            self.toggle
                .input_wrapper()
                .view(&self.toggle.wrapper_props(), &self.input, &self.sheet),
            help
        )
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program = Program::<Login>::builder().build()?;
    program.run().await?;
    Ok(())
}
