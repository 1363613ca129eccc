//! Shared UI constants such as colors, element ids, and scripts.

pub const BG_DEEPEST: &str = "#09090b";
pub const BG_BASE: &str = "#0a0a0b";
pub const BG_ELEVATED: &str = "#141414";
pub const BG_SURFACE: &str = "#1a1a1a";
pub const BG_HOVER: &str = "#262626";

pub const BORDER_SUBTLE: &str = "#1f1f1f";
pub const BORDER_DEFAULT: &str = "#27272a";

pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_SECONDARY: &str = "#a1a1aa";
pub const TEXT_MUTED: &str = "#71717a";
pub const TEXT_DIM: &str = "#52525b";

pub const ACCENT_VIDEO: &str = "#22c55e";

pub const WINDOW_TITLE: &str = "SpeedPlay";
pub const WINDOW_WIDTH: f64 = 1100.0;
pub const WINDOW_HEIGHT: f64 = 760.0;

// Element ids shared with the bridge script below.
pub const VIDEO_ID: &str = "player-video";
pub const CONTAINER_ID: &str = "player-container";
pub const DROP_ZONE_ID: &str = "player-drop-zone";
pub const FILE_INPUT_ID: &str = "player-file-input";
pub const RATE_INPUT_ID: &str = "player-rate-input";

/// Installs `window.speedPlayer` and forwards platform events to Rust.
///
/// The fullscreen API family (standard, webkit, moz, ms) is picked once here
/// so the Rust side only ever sees one capability.
pub const PLAYER_BRIDGE_SCRIPT: &str = r#"
const VIDEO_ID = "player-video";
const CONTAINER_ID = "player-container";
const DROP_ZONE_ID = "player-drop-zone";
const FILE_INPUT_ID = "player-file-input";

function firstFunction(target, names) {
    for (const name of names) {
        if (typeof target[name] === "function") {
            return name;
        }
    }
    return null;
}

const requestName = firstFunction(Element.prototype, [
    "requestFullscreen", "webkitRequestFullscreen", "mozRequestFullScreen", "msRequestFullscreen",
]);
const exitName = firstFunction(document, [
    "exitFullscreen", "webkitExitFullscreen", "mozCancelFullScreen", "msExitFullscreen",
]);
const elementName = [
    "fullscreenElement", "webkitFullscreenElement", "mozFullScreenElement", "msFullscreenElement",
].find((name) => name in document) || "fullscreenElement";

const files = new Map();
let nextToken = 1;
let dragging = false;
let lastTarget = "none";

function video() {
    return document.getElementById(VIDEO_ID);
}

function container() {
    return document.getElementById(CONTAINER_ID);
}

function requireVideo() {
    const el = video();
    if (!el) {
        throw new Error("video element missing");
    }
    return el;
}

function fullscreenTarget() {
    const el = document[elementName] || null;
    if (!el) {
        return "none";
    }
    if (el === video()) {
        return "video";
    }
    if (el === container()) {
        return "container";
    }
    return "other";
}

function describe(file, origin) {
    const token = nextToken++;
    files.set(token, file);
    return { token, name: file.name, mime: file.type || "", size: file.size || 0, origin };
}

function isEditable(el) {
    if (!el) {
        return false;
    }
    if (el.isContentEditable) {
        return true;
    }
    const tag = el.tagName;
    if (tag === "TEXTAREA" || tag === "SELECT") {
        return true;
    }
    if (tag !== "INPUT") {
        return false;
    }
    const type = (el.type || "text").toLowerCase();
    return ![
        "button", "checkbox", "radio", "range", "submit", "reset", "file", "color", "image",
    ].includes(type);
}

const handlers = {
    position: () => requireVideo().currentTime,
    setPosition: ({ seconds }) => {
        requireVideo().currentTime = seconds;
    },
    rate: () => requireVideo().playbackRate,
    setRate: ({ rate }) => {
        requireVideo().playbackRate = rate;
    },
    createSourceUrl: ({ token }) => {
        const file = files.get(token);
        if (!file) {
            throw new Error("unknown file " + token);
        }
        files.delete(token);
        return URL.createObjectURL(file);
    },
    revokeSourceUrl: ({ url }) => {
        URL.revokeObjectURL(url);
    },
    discardFile: ({ token }) => {
        files.delete(token);
    },
    loadSource: ({ url }) => {
        const el = requireVideo();
        el.src = url;
        el.load();
    },
    play: async () => {
        await requireVideo().play();
    },
    fullscreenElement: () => fullscreenTarget(),
    requestFullscreen: async ({ target }) => {
        if (!requestName) {
            throw new Error("fullscreen is not supported");
        }
        const el = target === "video" ? video() : container();
        if (!el) {
            throw new Error("no element for " + target);
        }
        await el[requestName]();
    },
    exitFullscreen: async () => {
        if (!exitName) {
            throw new Error("fullscreen is not supported");
        }
        if (!document[elementName]) {
            return;
        }
        await document[exitName]();
    },
};

window.speedPlayer = {
    async call(method, args) {
        const handler = handlers[method];
        if (!handler) {
            return { ok: false, error: "unknown method " + method };
        }
        try {
            const value = await handler(args || {});
            return { ok: true, value: value === undefined ? null : value };
        } catch (err) {
            return { ok: false, error: String((err && err.message) || err) };
        }
    },
};

function reportFullscreen() {
    const target = fullscreenTarget();
    if (target === lastTarget) {
        return;
    }
    lastTarget = target;
    dioxus.send({ kind: "fullscreen_change", target });
}

for (const name of ["fullscreenchange", "webkitfullscreenchange", "mozfullscreenchange", "MSFullscreenChange"]) {
    document.addEventListener(name, reportFullscreen);
}

document.addEventListener("keydown", (e) => {
    dioxus.send({
        kind: "key_down",
        key: e.key,
        shift: e.shiftKey,
        ctrl: e.ctrlKey,
        alt: e.altKey,
        meta: e.metaKey,
        editable: isEditable(document.activeElement),
    });
});

// Keep stray drops from navigating the web view to the file.
window.addEventListener("dragover", (e) => e.preventDefault());
window.addEventListener("drop", (e) => e.preventDefault());

function attach() {
    const el = video();
    const zone = document.getElementById(DROP_ZONE_ID);
    const input = document.getElementById(FILE_INPUT_ID);
    if (!el || !zone || !input) {
        setTimeout(attach, 100);
        return;
    }

    el.addEventListener("ratechange", () => {
        dioxus.send({ kind: "rate_change", rate: el.playbackRate });
    });

    zone.addEventListener("dragover", (e) => {
        e.preventDefault();
        if (!dragging) {
            dragging = true;
            dioxus.send({ kind: "drag_over" });
        }
    });
    zone.addEventListener("dragleave", () => {
        dragging = false;
        dioxus.send({ kind: "drag_leave" });
    });
    zone.addEventListener("drop", (e) => {
        e.preventDefault();
        dragging = false;
        const file = e.dataTransfer && e.dataTransfer.files.length > 0 ? e.dataTransfer.files[0] : null;
        dioxus.send({ kind: "file_dropped", file: file ? describe(file, "drop") : null });
    });

    input.addEventListener("change", () => {
        if (input.files && input.files.length > 0) {
            dioxus.send({ kind: "file_chosen", file: describe(input.files[0], "picker") });
        }
        input.value = "";
    });

    dioxus.send({ kind: "rate_change", rate: el.playbackRate });
}

attach();
await new Promise(() => {});
"#;

pub const PLAYER_STYLES: &str = r#"
.player-container { position: relative; display: flex; flex-direction: column; flex: 1; min-height: 0; background-color: #000; }
.player-container video { flex: 1; min-height: 0; width: 100%; background-color: #000; }
.player-container.fullscreen-active { width: 100vw; height: 100vh; }
.player-container.fullscreen-active .transport-bar {
    position: absolute; left: 0; right: 0; bottom: 0;
    background-color: rgba(10, 10, 11, 0.82);
    transition: opacity 0.25s ease;
}
.player-container.controls-hidden { cursor: none; }
.player-container.controls-hidden .transport-bar { opacity: 0; pointer-events: none; }
.drop-zone { transition: border-color 0.15s ease, background-color 0.15s ease; }
.drop-zone.dragover { border-color: #22c55e !important; background-color: #141414 !important; }
.transport-btn { transition: background-color 0.12s ease; }
.transport-btn:hover { background-color: #262626 !important; }
.browse-link { cursor: pointer; text-decoration: underline; }
"#;
