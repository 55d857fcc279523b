// PixelBezier
// copyright zipxing@hotmail.com 2022～2025

//! A global event center and a global timer center.
//!
//! Events are named flags: a render method registers interest in an event,
//! model code emits it, and the render consumes it once with event_check.
//! Timers count down in frames at GAME_FRAME and emit their event when they
//! reach zero; exdata carries an optional serialized payload along.

use crate::GAME_FRAME;
use serde::Serialize;
use std::{cell::RefCell, collections::HashMap, rc::Rc};

thread_local! {
    static GAME_TIMER: Rc<RefCell<Timers>> = Rc::new(RefCell::new(Timers::new()));
    static EVENT_CENTER: Rc<RefCell<HashMap<String, HashMap<String, bool>>>> =
        Rc::new(RefCell::new(HashMap::new()));
}

/// A global HashMap is used to save callbacks of events
pub fn event_register(event: &str, func: &str) {
    EVENT_CENTER.with(|ec| {
        let mut ec_ref = ec.borrow_mut();
        match ec_ref.get_mut(event) {
            Some(ht) => {
                ht.insert(func.to_string(), false);
            }
            None => {
                let mut h: HashMap<String, bool> = HashMap::new();
                h.insert(func.to_string(), false);
                ec_ref.insert(event.to_string(), h);
            }
        }
    });
}

pub fn event_check(event: &str, func: &str) -> bool {
    EVENT_CENTER.with(|ec| {
        let mut ec_ref = ec.borrow_mut();
        if let Some(ht) = ec_ref.get_mut(event) {
            if let Some(flag) = ht.get_mut(func) {
                if *flag {
                    *flag = false;
                    return true;
                }
            }
        }
        false
    })
}

pub fn event_emit(event: &str) {
    EVENT_CENTER.with(|ec| {
        let mut ec_ref = ec.borrow_mut();
        if let Some(ht) = ec_ref.get_mut(event) {
            for value in ht.values_mut() {
                if !(*value) {
                    *value = true;
                }
            }
        }
    });
}

pub fn timer_register(name: &str, time: f32, func: &str) {
    GAME_TIMER.with(|gt| {
        gt.borrow_mut().register(name, time, func);
    });
}

pub fn timer_fire<T>(name: &str, value: T)
where
    T: Serialize,
{
    GAME_TIMER.with(|gt| {
        gt.borrow_mut().fire(name, value);
    });
}

pub fn timer_cancel(name: &str, nocall: bool) {
    GAME_TIMER.with(|gt| {
        gt.borrow_mut().cancel(name, nocall);
    });
}

pub fn timer_percent(name: &str) -> f32 {
    GAME_TIMER.with(|gt| gt.borrow_mut().percent(name))
}

pub fn timer_exdata(name: &str) -> Option<Vec<u8>> {
    GAME_TIMER.with(|gt| gt.borrow_mut().exdata(name))
}

pub fn timer_update() {
    GAME_TIMER.with(|gt| {
        gt.borrow_mut().update();
    });
}

pub struct Timer {
    time: u32,
    count: u32,
    exdata: Vec<u8>,
}

#[derive(Default)]
pub struct Timers {
    pub timers: HashMap<String, Timer>,
}

impl Timers {
    pub fn new() -> Self {
        Self { ..Self::default() }
    }

    pub fn register(&mut self, name: &str, time: f32, callback: &str) {
        match self.timers.get_mut(name) {
            Some(_) => {}
            None => {
                let timer = Timer {
                    time: 0,
                    count: (time * GAME_FRAME as f32) as u32,
                    exdata: vec![],
                };
                self.timers.insert(name.to_string(), timer);
                event_register(name, callback);
            }
        }
    }

    pub fn percent(&mut self, name: &str) -> f32 {
        match self.timers.get_mut(name) {
            Some(timer) => timer.time as f32 / timer.count as f32,
            None => 0f32,
        }
    }

    pub fn exdata(&mut self, name: &str) -> Option<Vec<u8>> {
        self.timers.get_mut(name).map(|timer| timer.exdata.clone())
    }

    pub fn fire<T>(&mut self, name: &str, value: T)
    where
        T: Serialize,
    {
        if let Some(timer) = self.timers.get_mut(name) {
            timer.time = timer.count;
            timer.exdata = bincode::serialize(&value).unwrap();
        }
    }

    pub fn cancel(&mut self, name: &str, nocall: bool) {
        if let Some(timer) = self.timers.get_mut(name) {
            timer.time = 0;
            if !nocall {
                event_emit(name);
            }
        }
    }

    pub fn update(&mut self) {
        for (name, timer) in &mut self.timers {
            if timer.time > 0 {
                timer.time -= 1;
                if timer.time == 0 {
                    event_emit(name);
                }
            }
        }
    }
}
