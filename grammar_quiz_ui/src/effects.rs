use dioxus::prelude::*;
use grammar_quiz_engine::ui_state::{Effects, Tone};

// one AudioContext for the whole page, resumed on first use
const AUDIO: &str = r#"
const ctx = window.__grammarAudio || (window.__grammarAudio = new (window.AudioContext || window.webkitAudioContext)());
if (ctx.state === 'suspended') { ctx.resume(); }
"#;

const CORRECT_TONE: &str = r#"
const beep = (freq, start, duration) => {
    const osc = ctx.createOscillator();
    const gain = ctx.createGain();
    osc.type = 'sine';
    osc.frequency.value = freq;
    osc.connect(gain);
    gain.connect(ctx.destination);
    const t = ctx.currentTime + start;
    osc.start(t);
    gain.gain.exponentialRampToValueAtTime(0.00001, t + duration);
    osc.stop(t + duration);
};
beep(800, 0, 0.1);
beep(1200, 0.1, 0.2);
"#;

const WRONG_TONE: &str = r#"
const osc = ctx.createOscillator();
const gain = ctx.createGain();
osc.type = 'triangle';
osc.frequency.setValueAtTime(150, ctx.currentTime);
osc.frequency.exponentialRampToValueAtTime(50, ctx.currentTime + 0.3);
osc.connect(gain);
gain.connect(ctx.destination);
gain.gain.setValueAtTime(0.5, ctx.currentTime);
gain.gain.exponentialRampToValueAtTime(0.01, ctx.currentTime + 0.3);
osc.start();
osc.stop(ctx.currentTime + 0.3);
"#;

const CONFETTI: &str = r#"
if (window.confetti) { window.confetti({ particleCount: 100, spread: 70, origin: { y: 0.6 } }); }
"#;

pub fn play(effects: Effects) {
    if let Some(tone) = effects.tone {
        let tone = match tone {
            Tone::Correct => CORRECT_TONE,
            Tone::Wrong => WRONG_TONE,
        };
        document::eval(&format!("{AUDIO}{tone}"));
    }
    if effects.confetti {
        document::eval(CONFETTI);
    }
}
