use crate::config::ValidationConfig;
use crate::core::FormKind;
use crate::error::Result;
use crate::screen::{LoginScreen, Navigation, ScreenEvent, SignUpScreen};
use crate::validation::FormValidator;
use std::rc::Rc;
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    SignUp,
}

impl From<FormKind> for Route {
    fn from(kind: FormKind) -> Self {
        match kind {
            FormKind::Login => Self::Login,
            FormKind::SignUp => Self::SignUp,
        }
    }
}

pub enum ActiveScreen {
    Login(LoginScreen),
    SignUp(SignUpScreen),
}

impl ActiveScreen {
    pub fn route(&self) -> Route {
        match self {
            Self::Login(_) => Route::Login,
            Self::SignUp(_) => Route::SignUp,
        }
    }

    fn handle(&mut self, event: ScreenEvent) -> Result<Navigation> {
        match self {
            Self::Login(screen) => screen.handle(event),
            Self::SignUp(screen) => screen.handle(event),
        }
    }
}

type Callback = Box<dyn FnMut()>;

#[derive(Default)]
struct Callbacks {
    login_success: Vec<Callback>,
    sign_up_success: Vec<Callback>,
    route_changed: Vec<Box<dyn FnMut(Route)>>,
}

/// Back stack of screens, starting at login. Only the top screen is alive;
/// leaving a screen drops its form.
pub struct AuthFlow {
    login_validator: Rc<FormValidator>,
    sign_up_validator: Rc<FormValidator>,
    stack: Vec<Route>,
    active: ActiveScreen,
    callbacks: Callbacks,
}

impl AuthFlow {
    pub fn new(config: &ValidationConfig) -> Result<Self> {
        let login_validator = Rc::new(FormValidator::from_config(FormKind::Login, config)?);
        let sign_up_validator = Rc::new(FormValidator::from_config(FormKind::SignUp, config)?);
        let active = ActiveScreen::Login(LoginScreen::open(Rc::clone(&login_validator))?);

        Ok(Self {
            login_validator,
            sign_up_validator,
            stack: vec![Route::Login],
            active,
            callbacks: Callbacks::default(),
        })
    }

    pub fn on_login_success(&mut self, callback: impl FnMut() + 'static) {
        self.callbacks.login_success.push(Box::new(callback));
    }

    pub fn on_sign_up_success(&mut self, callback: impl FnMut() + 'static) {
        self.callbacks.sign_up_success.push(Box::new(callback));
    }

    pub fn on_route_changed(&mut self, callback: impl FnMut(Route) + 'static) {
        self.callbacks.route_changed.push(Box::new(callback));
    }

    pub fn route(&self) -> Route {
        self.active.route()
    }

    pub fn stack(&self) -> &[Route] {
        &self.stack
    }

    pub fn active(&self) -> &ActiveScreen {
        &self.active
    }

    pub fn login_screen(&self) -> Option<&LoginScreen> {
        match &self.active {
            ActiveScreen::Login(screen) => Some(screen),
            ActiveScreen::SignUp(_) => None,
        }
    }

    pub fn sign_up_screen(&self) -> Option<&SignUpScreen> {
        match &self.active {
            ActiveScreen::SignUp(screen) => Some(screen),
            ActiveScreen::Login(_) => None,
        }
    }

    pub fn handle(&mut self, event: ScreenEvent) -> Result<Navigation> {
        let navigation = self.active.handle(event)?;
        match navigation {
            Navigation::Stay => {}
            Navigation::OpenSignUp => self.push(Route::SignUp)?,
            Navigation::Back => self.pop()?,
            Navigation::LoginSucceeded => {
                for callback in &mut self.callbacks.login_success {
                    callback();
                }
            }
            Navigation::SignUpSucceeded => {
                for callback in &mut self.callbacks.sign_up_success {
                    callback();
                }
                self.pop_to_login()?;
            }
        }
        Ok(navigation)
    }

    fn push(&mut self, route: Route) -> Result<()> {
        self.stack.push(route);
        self.show(route)
    }

    fn pop(&mut self) -> Result<()> {
        if self.stack.len() <= 1 {
            return Ok(());
        }
        self.stack.pop();
        match self.stack.last() {
            Some(&top) => self.show(top),
            None => Ok(()),
        }
    }

    fn pop_to_login(&mut self) -> Result<()> {
        while self.stack.last() == Some(&Route::SignUp) {
            self.stack.pop();
        }
        if self.stack.is_empty() {
            self.stack.push(Route::Login);
        }
        self.show(Route::Login)
    }

    fn show(&mut self, route: Route) -> Result<()> {
        let from = self.active.route();
        self.active = match route {
            Route::Login => {
                ActiveScreen::Login(LoginScreen::open(Rc::clone(&self.login_validator))?)
            }
            Route::SignUp => {
                ActiveScreen::SignUp(SignUpScreen::open(Rc::clone(&self.sign_up_validator))?)
            }
        };
        info!(?from, to = ?route, depth = self.stack.len(), "navigated");
        for callback in &mut self.callbacks.route_changed {
            callback(route);
        }
        Ok(())
    }
}
