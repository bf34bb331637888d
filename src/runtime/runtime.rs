use crate::runtime::msg::{Action, Event, Msg};
use crate::runtime::{Effect, EffectFuture, Env, Model};
use derivative::Derivative;
use enclose::enclose;
use futures::channel::mpsc::{channel, Receiver, Sender};
use futures::FutureExt;
use serde::Serialize;
use std::cell::{Ref, RefCell};
use std::marker::PhantomData;
use std::rc::Rc;

#[derive(Serialize, Debug, PartialEq)]
#[serde(tag = "name", content = "args")]
pub enum RuntimeEvent<E: Env, M: Model<E>> {
    NewState(Vec<M::Field>),
    CoreEvent(Event),
}

#[derive(Debug)]
pub struct RuntimeAction<E: Env, M: Model<E>> {
    pub field: Option<M::Field>,
    pub action: Action,
}

/// Owns the app model on the host's single thread.
///
/// Effect futures are handed to [`Env::exec_concurrent`] or
/// [`Env::exec_sequential`] and feed their output back into the model.
/// Changes and core events reach the host through the returned [`Receiver`].
#[derive(Derivative)]
#[derivative(Clone(bound = ""))]
pub struct Runtime<E: Env, M: Model<E>> {
    model: Rc<RefCell<M>>,
    tx: Sender<RuntimeEvent<E, M>>,
    env: PhantomData<E>,
}

impl<E, M> Runtime<E, M>
where
    E: Env + 'static,
    M: Model<E> + 'static,
{
    pub fn new(
        model: M,
        effects: Vec<Effect>,
        buffer: usize,
    ) -> (Self, Receiver<RuntimeEvent<E, M>>) {
        let (tx, rx) = channel(buffer);
        let runtime = Runtime {
            model: Rc::new(RefCell::new(model)),
            tx,
            env: PhantomData,
        };
        runtime.handle_effects(effects, vec![]);
        (runtime, rx)
    }
    pub fn model(&self) -> Ref<M> {
        self.model.borrow()
    }
    pub fn dispatch(&self, action: RuntimeAction<E, M>) {
        let msg = Msg::Action(action.action);
        let (effects, fields) = match &action.field {
            Some(field) => self.model.borrow_mut().update_field(&msg, field),
            None => self.model.borrow_mut().update(&msg),
        };
        self.handle_effects(effects, fields);
    }
    /// Events the host no longer drains are dropped.
    fn emit(&self, event: RuntimeEvent<E, M>) {
        if let Err(_error) = self.tx.clone().try_send(event) {
            #[cfg(debug_assertions)]
            E::log(format!("Runtime event dropped: {_error}"));
        }
    }
    fn handle_effects(&self, effects: Vec<Effect>, fields: Vec<M::Field>) {
        if !fields.is_empty() {
            self.emit(RuntimeEvent::NewState(fields));
        };
        effects
            .into_iter()
            .for_each(enclose!((self.clone() => runtime) move |effect| {
                match effect {
                    Effect::Msg(msg) => {
                        runtime.handle_effect_output(*msg);
                    }
                    Effect::Future(EffectFuture::Sequential(future)) => {
                        E::exec_sequential(future.map(enclose!((runtime) move |msg| {
                            runtime.handle_effect_output(msg);
                        })))
                    }
                    Effect::Future(EffectFuture::Concurrent(future)) => {
                        E::exec_concurrent(future.map(enclose!((runtime) move |msg| {
                            runtime.handle_effect_output(msg);
                        })))
                    }
                }
            }));
    }
    fn handle_effect_output(&self, msg: Msg) {
        match msg {
            Msg::Event(event) => {
                self.emit(RuntimeEvent::CoreEvent(event));
            }
            Msg::Internal(_) => {
                let (effects, fields) = self.model.borrow_mut().update(&msg);
                self.handle_effects(effects, fields);
            }
            Msg::Action(_) => {
                panic!("effects are not allowed to resolve with action");
            }
        }
    }
}
