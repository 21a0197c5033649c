#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Parent,
}

impl Role {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Self::Admin),
            "parent" => Some(Self::Parent),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Parent => "parent",
        }
    }

    /// Tabs of this role's dashboard, in display order.
    pub fn sections(self) -> &'static [Section] {
        match self {
            Self::Admin => &[
                Section::Overview,
                Section::Attendance,
                Section::Fees,
                Section::Media,
            ],
            Self::Parent => &[
                Section::Overview,
                Section::Attendance,
                Section::Fees,
                Section::Gallery,
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Overview,
    Attendance,
    Fees,
    Media,
    Gallery,
}

impl Section {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "overview" => Some(Self::Overview),
            "attendance" => Some(Self::Attendance),
            "fees" => Some(Self::Fees),
            "media" => Some(Self::Media),
            "gallery" => Some(Self::Gallery),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Attendance => "attendance",
            Self::Fees => "fees",
            Self::Media => "media",
            Self::Gallery => "gallery",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn { role: Role, section: Section },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Accepted,
    /// Blank username or password: nothing changes and nothing is reported.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    NotLoggedIn,
    WrongRole { required: Role, actual: Role },
    SectionNotOnDashboard { role: Role, section: Section },
}

impl Session {
    /// Any non-empty credential pair is accepted; nothing is verified.
    pub fn login(&mut self, role: Role, username: &str, password: &str) -> LoginOutcome {
        if username.is_empty() || password.is_empty() {
            return LoginOutcome::Ignored;
        }
        *self = Session::LoggedIn {
            role,
            section: Section::Overview,
        };
        LoginOutcome::Accepted
    }

    pub fn logout(&mut self) {
        *self = Session::LoggedOut;
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, Session::LoggedIn { .. })
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            Session::LoggedOut => None,
            Session::LoggedIn { role, .. } => Some(*role),
        }
    }

    pub fn section(&self) -> Option<Section> {
        match self {
            Session::LoggedOut => None,
            Session::LoggedIn { section, .. } => Some(*section),
        }
    }

    pub fn select_section(&mut self, next: Section) -> Result<(), AccessError> {
        let Session::LoggedIn { role, section } = self else {
            return Err(AccessError::NotLoggedIn);
        };
        if !role.sections().contains(&next) {
            return Err(AccessError::SectionNotOnDashboard {
                role: *role,
                section: next,
            });
        }
        *section = next;
        Ok(())
    }

    pub fn require_logged_in(&self) -> Result<Role, AccessError> {
        self.role().ok_or(AccessError::NotLoggedIn)
    }

    pub fn require_role(&self, required: Role) -> Result<(), AccessError> {
        let actual = self.require_logged_in()?;
        if actual != required {
            return Err(AccessError::WrongRole { required, actual });
        }
        Ok(())
    }
}
