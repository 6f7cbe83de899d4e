// src/app/timer_handler.rs
//! setInterval / setTimeout まわり。
//! 1秒ごとの tick と、ハズレを裏返すまでの待ち時間をここで作るよ ⏱️

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// `setInterval` で動く繰り返しタイマー。
#[derive(Default)]
pub(crate) struct IntervalTimer {
    handle: Option<i32>,
    // 止めてもクロージャはすぐには捨てない。
    // tick の中で stop されることがあるので、実行中のクロージャを drop しないようにしてる。
    // 次に start したときに入れ替わる。
    closure: Option<Closure<dyn FnMut()>>,
}

impl IntervalTimer {
    pub fn new() -> Self {
        IntervalTimer::default()
    }

    /// `interval_ms` ごとに `on_tick` を呼ぶタイマーを始めるよ。動いてたら一旦止める。
    pub fn start(&mut self, interval_ms: u32, on_tick: impl FnMut() + 'static) -> Result<(), JsValue> {
        self.stop()?;
        let timeout = timer_ms(interval_ms)?;
        let window = web_sys::window().ok_or("Failed to get window")?;
        let closure = Closure::wrap(Box::new(on_tick) as Box<dyn FnMut()>);
        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            timeout,
        )?;
        self.handle = Some(handle);
        self.closure = Some(closure);
        Ok(())
    }

    /// タイマーを止める。止まってたら何もしない。
    pub fn stop(&mut self) -> Result<(), JsValue> {
        if let Some(handle) = self.handle.take() {
            let window = web_sys::window().ok_or("Failed to get window")?;
            window.clear_interval_with_handle(handle);
        }
        Ok(())
    }
}

/// `ms` ミリ秒後に解決する Future。`setTimeout` を Promise で包んだだけ。
pub(crate) fn sleep_ms(ms: u32) -> JsFuture {
    let promise = Promise::new(&mut |resolve, reject| {
        let scheduled = timer_ms(ms).and_then(|timeout| {
            web_sys::window()
                .ok_or_else(|| JsValue::from_str("Failed to get window"))?
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout)
        });
        if let Err(e) = scheduled {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });
    JsFuture::from(promise)
}

// ブラウザのタイマーは i32 のミリ秒。はみ出す値は負の数 (= 即時実行) になるので弾く
fn timer_ms(ms: u32) -> Result<i32, JsValue> {
    i32::try_from(ms).map_err(|_| JsValue::from_str(&format!("timer of {} ms is out of range", ms)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_values_within_range_pass_through() {
        assert_eq!(timer_ms(700).ok(), Some(700));
        assert_eq!(timer_ms(i32::MAX as u32).ok(), Some(i32::MAX));
    }
}
