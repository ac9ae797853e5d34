/*!
# Introductory Tutorial

Begin by opening a terminal and running the `basic` executable. If you
get a `>` prompt, you are ready for this tutorial. Type CTRL-D to exit.

When you see the prompt, BASIC is ready to accept a statement.
A statement describes the work you want the computer to do. Let's tell the
computer to print something. Go ahead and try your first statement.
Type it in followed by ENTER.

<pre><code>&nbsp;> PRINT 6 * 7
&nbsp;  42
</code></pre>

Entering a statement which executes immediately is called direct mode.
To make more interesting programs, we'll have to assemble many statements
together into a program. To do this, simply precede the statement with
any decimal integer between 0 and 65535 inclusive.

<pre><code>&nbsp;> 10 PRINT 6 * 7
</code></pre>

Nothing happens. This is called indirect mode. The statement is saved to
be executed later. Let's try a couple new commands.

<pre><code>&nbsp;> LIST
&nbsp;  10 PRINT 6 * 7
&nbsp;> RUN
&nbsp;  42
</code></pre>

Now that we have a program in memory, we can add more lines or replace
existing lines. To edit a line, type the line number and press TAB. The
line will be loaded into the input buffer for you to edit.

<pre><code>&nbsp;> 10<i>{TAB}</i>
&nbsp;> 10 PRINT 6 * 7
</code></pre>

Typing a line number by itself deletes that line. `NEW` deletes the
whole program.

Let's write something that counts.

<pre><code>&nbsp;> NEW
&nbsp;> 10 FOR I = 1 TO 3
&nbsp;> 20 PRINT I, I * I
&nbsp;> 30 NEXT I
&nbsp;> RUN
&nbsp;  1 1
&nbsp;  2 4
&nbsp;  3 9
</code></pre>

When something goes wrong the program stops and the error names the line.

<pre><code>&nbsp;> 20 PRINT I / 0
&nbsp;> RUN
&nbsp;  <b>DIVISION BY ZERO IN 20 (8..9)</b>
</code></pre>

A program can be saved in any text editor, one numbered line per line of
the file, and loaded by naming it on the command line. Add `--run` to
start it straight away.

<pre><code>&nbsp;$ basic --run count.bas
</code></pre>

Set `RUST_LOG=debug` to watch the interpreter at work, or `RUST_LOG=trace`
to see every line it executes.
*/
