#[cfg(test)]
#[path = "slash_commands_test.rs"]
mod tests;

pub struct SlashCommand {
    command: String,
    pub args: Vec<String>,
}

impl SlashCommand {
    pub fn parse(text: &str) -> Option<SlashCommand> {
        let mut args = text
            .split_whitespace()
            .map(|e| return e.to_string())
            .collect::<Vec<String>>();
        if args.is_empty() {
            return None;
        }
        let prefix = args.remove(0);

        let cmd = SlashCommand {
            command: prefix,
            args,
        };
        if cmd.is_quit()
            || cmd.is_help()
            || cmd.is_login()
            || cmd.is_login_google()
            || cmd.is_guest()
            || cmd.is_register()
            || cmd.is_confirm()
            || cmd.is_forgot_password()
            || cmd.is_reset_password()
            || cmd.is_logout()
            || cmd.is_new_chat()
            || cmd.is_chat_list()
            || cmd.is_select()
            || cmd.is_rename()
            || cmd.is_cancel()
            || cmd.is_delete()
            || cmd.is_mode()
            || cmd.is_attach()
            || cmd.is_detach()
            || cmd.is_profile()
            || cmd.is_subscription()
        {
            return Some(cmd);
        }

        return None;
    }

    /// Everything after the command, joined back together.
    pub fn rest(&self, skip: usize) -> String {
        return self
            .args
            .iter()
            .skip(skip)
            .map(|arg| return arg.as_str())
            .collect::<Vec<&str>>()
            .join(" ");
    }

    fn is(&self, names: &[&str]) -> bool {
        return names.contains(&self.command.as_str());
    }

    pub fn is_quit(&self) -> bool {
        return self.is(&["/q", "/quit", "/exit"]);
    }

    pub fn is_help(&self) -> bool {
        return self.is(&["/h", "/help"]);
    }

    pub fn is_login(&self) -> bool {
        return self.is(&["/login"]);
    }

    pub fn is_login_google(&self) -> bool {
        return self.is(&["/google"]);
    }

    pub fn is_guest(&self) -> bool {
        return self.is(&["/guest"]);
    }

    pub fn is_register(&self) -> bool {
        return self.is(&["/register"]);
    }

    pub fn is_confirm(&self) -> bool {
        return self.is(&["/confirm"]);
    }

    pub fn is_forgot_password(&self) -> bool {
        return self.is(&["/forgot"]);
    }

    pub fn is_reset_password(&self) -> bool {
        return self.is(&["/reset"]);
    }

    pub fn is_logout(&self) -> bool {
        return self.is(&["/logout"]);
    }

    pub fn is_new_chat(&self) -> bool {
        return self.is(&["/n", "/new"]);
    }

    pub fn is_chat_list(&self) -> bool {
        return self.is(&["/chats", "/ls"]);
    }

    pub fn is_select(&self) -> bool {
        return self.is(&["/s", "/select"]);
    }

    pub fn is_rename(&self) -> bool {
        return self.is(&["/rename"]);
    }

    pub fn is_cancel(&self) -> bool {
        return self.is(&["/cancel"]);
    }

    pub fn is_delete(&self) -> bool {
        return self.is(&["/delete", "/rm"]);
    }

    pub fn is_mode(&self) -> bool {
        return self.is(&["/m", "/mode"]);
    }

    pub fn is_attach(&self) -> bool {
        return self.is(&["/a", "/attach"]);
    }

    pub fn is_detach(&self) -> bool {
        return self.is(&["/detach"]);
    }

    pub fn is_profile(&self) -> bool {
        return self.is(&["/p", "/profile"]);
    }

    pub fn is_subscription(&self) -> bool {
        return self.is(&["/subscription", "/plans"]);
    }
}
