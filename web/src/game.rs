use crate::utils::*;
use clap::Args;
use concentration_core as game;
use game::{DeckGenerator, ShuffledDeckGenerator};
use gloo::timers::callback::{Interval, Timeout};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use yew::html::Scope;
use yew::prelude::*;

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl<E> HasUpdate for Result<game::FlipOutcome, E> {
    fn has_update(self) -> bool {
        self.map_or(false, |outcome: game::FlipOutcome| outcome.has_update())
    }
}

/// Live timers keyed by kind. Dropping a handle cancels the timer behind it,
/// so replacing or removing a slot never leaves a stray callback running.
#[derive(Debug)]
pub(crate) struct TimerSlots<H> {
    handles: BTreeMap<game::TimerKind, H>,
}

impl<H> TimerSlots<H> {
    fn new() -> Self {
        Self {
            handles: BTreeMap::new(),
        }
    }

    fn apply(
        &mut self,
        commands: game::TimerCommands,
        mut schedule: impl FnMut(game::TimerRequest) -> H,
    ) {
        use game::TimerCommand::*;

        for command in commands {
            match command {
                Schedule(request) => {
                    log::trace!("schedule {:?}", request);
                    self.handles.insert(request.token.kind, schedule(request));
                }
                Cancel(kind) => {
                    log::trace!("cancel {:?}", kind);
                    self.handles.remove(&kind);
                }
                CancelAll => self.clear(),
            }
        }
    }

    fn clear(&mut self) {
        self.handles.clear();
    }

    fn len(&self) -> usize {
        self.handles.len()
    }
}

#[derive(Debug)]
pub(crate) enum TimerHandle {
    Timeout(Timeout),
    Interval(Interval),
}

impl TimerHandle {
    fn spawn(request: game::TimerRequest, link: &Scope<GameView>) -> Self {
        let link = link.clone();
        let token = request.token;
        let fire = move || link.send_message(Msg::TimerFired(token));

        if request.repeating {
            Self::Interval(Interval::new(request.delay_ms, fire))
        } else {
            Self::Timeout(Timeout::new(request.delay_ms, fire))
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) enum Msg {
    Start,
    Reset,
    CardClick(game::Position),
    TimerFired(game::TimerToken),
}

#[derive(Properties, Clone, PartialEq)]
struct CardProps {
    pos: game::Position,
    card: game::CardView,
    #[prop_or_default]
    locked: bool,
    callback: Callback<game::Position>,
}

#[function_component(CardTile)]
fn card_component(props: &CardProps) -> Html {
    let CardProps {
        pos,
        card,
        locked,
        callback,
    } = props.clone();

    let mut class = classes!("card");
    if card.face_up {
        class.push("face-up");
    }
    if locked {
        class.push("locked");
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("card {} clicked", pos);
        callback.emit(pos);
    });

    html! {
        <div {class} {onclick}>
            {
                if card.face_up {
                    html! {
                        <img src={asset_path(card.label)} width="80" height="80" alt="Memory Card"/>
                    }
                } else {
                    html! { <span>{"?"}</span> }
                }
            }
        </div>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq, Default)]
pub(crate) struct GameProps {
    /// Force a seed for the first deck instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Seconds every card is shown after starting
    #[arg(long)]
    peek_secs: Option<u8>,

    /// Milliseconds a face-up pair stays visible before it is checked
    #[arg(long)]
    match_delay_ms: Option<u32>,

    /// Coins awarded per matched pair
    #[arg(long)]
    reward: Option<game::Score>,
}

impl GameProps {
    fn game_config(&self) -> game::GameConfig {
        let defaults = game::GameConfig::default();
        game::GameConfig::new(
            self.peek_secs.unwrap_or(defaults.peek_secs),
            self.match_delay_ms.unwrap_or(defaults.match_delay_ms),
            self.reward.unwrap_or(defaults.match_reward),
        )
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    engine: game::PlayEngine,
    timers: TimerSlots<TimerHandle>,
}

impl GameView {
    fn new_deck(seed: u64) -> game::Deck {
        log::debug!("seed: {}", seed);
        ShuffledDeckGenerator::new(seed).generate()
    }

    fn sync_timers(&mut self, ctx: &Context<Self>) {
        let commands = self.engine.take_timer_commands();
        if commands.is_empty() {
            return;
        }

        let link = ctx.link();
        self.timers
            .apply(commands, |request| TimerHandle::spawn(request, link));
        log::trace!("{} timers live", self.timers.len());
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let seed = props.seed.unwrap_or_else(js_random_seed);
        let engine = game::PlayEngine::new(Self::new_deck(seed), props.game_config());

        Self {
            engine,
            timers: TimerSlots::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        let updated = match msg {
            Start => {
                log::debug!("start game");
                self.engine.start().has_update()
            }
            Reset => {
                log::debug!("restart game");
                self.engine.reset(Self::new_deck(js_random_seed()));
                true
            }
            CardClick(pos) => self.engine.flip(pos).has_update(),
            TimerFired(token) => {
                let outcome = self.engine.fire_timer(token);
                log::trace!("timer {:?}: {:?}", token.kind, outcome);
                outcome.has_update()
            }
        };

        self.sync_timers(ctx);
        updated
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let board = game::BoardView::from_engine(&self.engine);
        let callback = ctx.link().callback(CardClick);

        let control = if board.game_started {
            html! { <button onclick={ctx.link().callback(|_| Reset)}>{"Restart Game"}</button> }
        } else {
            html! { <button onclick={ctx.link().callback(|_| Start)}>{"Start Game"}</button> }
        };

        html! {
            <div class="concentration">
                if board.won {
                    <h2>{"You WON! Congrats!"}</h2>
                }
                <div class="grid">
                    {
                        for self.engine.deck().iter().zip(board.cards.iter()).map(|((pos, _), &card)| {
                            let locked = !self.engine.can_flip_at(pos);
                            html! {
                                <CardTile {pos} {card} {locked} callback={callback.clone()}/>
                            }
                        })
                    }
                </div>
                if board.peeking {
                    <p>{format!("Images will hide in {} seconds", board.countdown)}</p>
                }
                <aside><p>{format!("EdCoins: {}", board.score)}</p></aside>
                {control}
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.timers.clear();
    }
}
